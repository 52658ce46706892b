//! kofu — follow a driving route near Kofu station and ring when it passes
//! the registered hazard.
//!
//! ```text
//! kofu [--config FILE.json] [--route FILE.csv] [--trace DIR] [--interactive]
//! ```
//!
//! Without `--interactive` the demo presses start once and exits when the
//! vehicle reaches the destination (or the route fetch fails).  With it,
//! type `start`, `reset`, or `quit` on stdin.

mod config;
mod route;

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};

use am_output::{BellEngine, CsvTraceWriter, LogDisplay, TraceObserver};
use am_route::{CsvRouteProvider, StaticRouteProvider};
use am_sim::{
    Controller, ControllerBuilder, DebouncedAlertPlayer, Event, IntervalTicker, LoopExit,
    LoopMessage, NoopObserver, PermissionPrompt, RunUntil, SimObserver, ThreadedFetcher,
    run_event_loop,
};

use config::load_config;
use route::{DemoProvider, builtin_route};

type DemoController = Controller<
    LogDisplay,
    DebouncedAlertPlayer<BellEngine<std::io::Stdout>>,
    IntervalTicker,
    ThreadedFetcher<DemoProvider>,
>;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Default)]
struct Args {
    config:      Option<PathBuf>,
    route:       Option<PathBuf>,
    trace:       Option<PathBuf>,
    interactive: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(flag) = it.next() {
        match flag.as_str() {
            "--config" => args.config = Some(it.next().context("--config needs a path")?.into()),
            "--route" => args.route = Some(it.next().context("--route needs a path")?.into()),
            "--trace" => args.trace = Some(it.next().context("--trace needs a directory")?.into()),
            "--interactive" => args.interactive = true,
            other => bail!("unknown argument {other:?}"),
        }
    }
    Ok(args)
}

// ── Platform stand-ins ────────────────────────────────────────────────────────

struct LoggedPrompt;

impl PermissionPrompt for LoggedPrompt {
    fn request_when_in_use(&mut self) {
        log::info!("requesting when-in-use location access");
    }
}

/// Forward stdin commands to the event loop until EOF or `quit`.
fn spawn_stdin_commands(tx: mpsc::Sender<LoopMessage>) -> Result<()> {
    std::thread::Builder::new()
        .name("kofu-stdin".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                let msg = match line.trim() {
                    "start" => LoopMessage::Event(Event::Start),
                    "reset" => LoopMessage::Event(Event::Reset),
                    "quit" | "exit" => LoopMessage::Shutdown,
                    "" => continue,
                    other => {
                        log::warn!("unknown command {other:?} (start | reset | quit)");
                        continue;
                    }
                };
                let quit = matches!(msg, LoopMessage::Shutdown);
                if tx.send(msg).is_err() || quit {
                    break;
                }
            }
            let _ = tx.send(LoopMessage::Shutdown);
        })?;
    Ok(())
}

fn run<O: SimObserver>(
    controller: &mut DemoController,
    rx:         &mpsc::Receiver<LoopMessage>,
    observer:   &mut O,
    until:      RunUntil,
) -> LoopExit {
    let t0 = Instant::now();
    let exit = run_event_loop(controller, rx, observer, until);
    log::info!("event loop exited ({exit:?}) after {:.1} s", t0.elapsed().as_secs_f64());
    exit
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;
    let config = load_config(args.config.as_deref())?;
    log::info!(
        "hazard at {} (radius {} m), tick every {} ms, alert clip {}",
        config.hazard,
        config.hazard_radius_m,
        config.tick_period_ms,
        config.alert_asset.display()
    );

    // 1. Route provider stand-in.
    let provider = match &args.route {
        Some(path) => DemoProvider::Csv(CsvRouteProvider::new(path)),
        None => DemoProvider::Builtin(StaticRouteProvider::new(builtin_route())),
    };

    // 2. Collaborators.
    let (tx, rx) = mpsc::channel::<LoopMessage>();
    let fetcher = ThreadedFetcher::new(Arc::new(provider), tx.clone());
    let engine = BellEngine::new(std::io::stdout(), Duration::from_millis(config.alert_clip_ms));
    let alert = DebouncedAlertPlayer::new(engine, config.alert_asset.clone());

    // 3. Controller.
    let mut controller = ControllerBuilder::new(LogDisplay::new(), alert, IntervalTicker::new(), fetcher)
        .config(config)
        .build()?;
    controller.boot(&mut LoggedPrompt);

    // 4. Commands.
    let until = if args.interactive {
        spawn_stdin_commands(tx.clone())?;
        RunUntil::Shutdown
    } else {
        tx.send(LoopMessage::Event(Event::Start))?;
        RunUntil::Settled
    };
    drop(tx);

    // 5. Run, with or without a trace file.
    match &args.trace {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let mut obs = TraceObserver::new(CsvTraceWriter::new(dir)?);
            run(&mut controller, &rx, &mut obs, until);
            if let Some(e) = obs.take_error() {
                log::error!("trace output error: {e}");
            }
            log::info!("trace: {} rows in {}", obs.rows(), dir.display());
        }
        None => {
            run(&mut controller, &rx, &mut NoopObserver, until);
        }
    }

    // 6. Summary.
    log::info!(
        "final phase {}, last position {}; alerts played {}, suppressed {}",
        controller.phase(),
        controller
            .display()
            .last_position()
            .map_or_else(|| "-".to_string(), |p| p.to_string()),
        controller.alert().started(),
        controller.alert().suppressed(),
    );
    Ok(())
}
