//! The `Controller` — owns the simulation state and its collaborators.

use std::time::Duration;

use am_core::{Generation, SimClock, Tick};

use crate::alert::{AlertOutcome, AlertPlayer};
use crate::display::{DisplaySink, PermissionPrompt, PinRole};
use crate::fetch::RouteFetcher;
use crate::observer::SimObserver;
use crate::state::{Effect, Event, Phase, SimParams, SimulationState};
use crate::tick::TickSource;

/// Drives one [`SimulationState`] and executes the effects of each
/// transition against its collaborators:
///
/// | Type param | Collaborator                                   |
/// |------------|------------------------------------------------|
/// | `D`        | [`DisplaySink`] — positions, pins, route       |
/// | `A`        | [`AlertPlayer`] — best-effort alert sound      |
/// | `T`        | [`TickSource`] — the single periodic timer     |
/// | `F`        | [`RouteFetcher`] — asynchronous route requests |
///
/// All calls happen on the thread that owns the controller; events are
/// handled strictly one at a time.
///
/// Create via [`ControllerBuilder`][crate::ControllerBuilder].
pub struct Controller<D, A, T, F>
where
    D: DisplaySink,
    A: AlertPlayer,
    T: TickSource,
    F: RouteFetcher,
{
    pub(crate) params:         SimParams,
    pub(crate) tick_period:    Duration,
    pub(crate) initial_span_m: f64,
    pub(crate) state:          SimulationState,
    pub(crate) clock:          SimClock,
    pub(crate) display:        D,
    pub(crate) alert:          A,
    pub(crate) ticks:          T,
    pub(crate) fetcher:        F,
}

impl<D, A, T, F> Controller<D, A, T, F>
where
    D: DisplaySink,
    A: AlertPlayer,
    T: TickSource,
    F: RouteFetcher,
{
    // ── Commands ──────────────────────────────────────────────────────────

    /// Request location access and draw the initial screen: the start region
    /// and both pins.
    pub fn boot<P: PermissionPrompt>(&mut self, prompt: &mut P) {
        prompt.request_when_in_use();
        self.display.focus(self.params.start, self.initial_span_m);
        self.display.place_pin(PinRole::CurrentLocation, self.params.start);
        self.display.place_pin(PinRole::Destination, self.params.end);
    }

    /// Fetch a route from start to end and follow it once it arrives.
    pub fn start<O: SimObserver>(&mut self, observer: &mut O) {
        self.handle(Event::Start, observer);
    }

    /// Halt any run and return to the start coordinate.
    pub fn reset<O: SimObserver>(&mut self, observer: &mut O) {
        self.handle(Event::Reset, observer);
    }

    /// Process one event to completion.
    pub fn handle<O: SimObserver>(&mut self, event: Event, observer: &mut O) {
        let before = self.state.phase;
        let state = std::mem::take(&mut self.state);
        let (next, effects) = state.handle(event, &self.params);
        self.state = next;

        if self.state.phase != before {
            log::info!("simulation {before} → {} ({})", self.state.phase, self.state.generation);
        }
        for effect in effects {
            self.apply(effect, observer);
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn generation(&self) -> Generation {
        self.state.generation
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn alert(&self) -> &A {
        &self.alert
    }

    pub fn ticks(&self) -> &T {
        &self.ticks
    }

    pub fn ticks_mut(&mut self) -> &mut T {
        &mut self.ticks
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// `true` when nothing can change the state without a new command:
    /// finished, or idle with no fetch in flight.
    pub fn is_settled(&self) -> bool {
        match self.state.phase {
            Phase::Finished => true,
            Phase::Idle => self.state.pending.is_none(),
            Phase::Running => false,
        }
    }

    // ── Effect execution ──────────────────────────────────────────────────

    fn apply<O: SimObserver>(&mut self, effect: Effect, observer: &mut O) {
        match effect {
            Effect::FetchRoute(request) => {
                log::info!("requesting route {} → {} ({})", request.from, request.to, request.generation);
                self.fetcher.fetch(request);
            }
            Effect::ArmTicks(epoch) => {
                self.clock.rewind();
                self.ticks.arm(epoch, self.tick_period);
            }
            Effect::DisarmTicks => self.ticks.disarm(),
            Effect::ShowRoute => {
                log::info!(
                    "following route: {} points, {:.0} m",
                    self.state.route.len(),
                    self.state.route.length_m()
                );
                self.display.show_route(&self.state.route);
            }
            Effect::Step(step) => {
                self.clock.advance();
                let tick = self.clock.current_tick;
                log::debug!(
                    "{tick}: {} is {:.1} m from hazard",
                    step.position,
                    step.proximity.distance_m
                );
                self.display.report_position(step.position);
                observer.on_step(tick, self.clock.elapsed_secs_at(tick), &step);
            }
            Effect::TriggerAlert => self.trigger_alert(observer),
            Effect::Finished { points } => {
                log::info!("route complete after {points} points");
                observer.on_finished(self.clock.current_tick);
            }
            Effect::Recentered(start) => {
                self.clock.rewind();
                self.display.focus(start, self.initial_span_m);
                self.display.report_position(start);
                observer.on_reset();
            }
        }
    }

    /// Alert failures are logged and swallowed; the tick loop never waits on
    /// or fails because of the sound.
    fn trigger_alert<O: SimObserver>(&mut self, observer: &mut O) {
        let tick: Tick = self.clock.current_tick;
        match self.alert.trigger_alert() {
            Ok(outcome) => {
                if outcome == AlertOutcome::Started {
                    log::info!("{tick}: hazard alert");
                }
                observer.on_alert(tick, outcome);
            }
            Err(e) => log::warn!("{tick}: {e}"),
        }
    }
}
