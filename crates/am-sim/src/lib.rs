//! `am-sim` — route-following simulation and hazard proximity alerts.
//!
//! # One event at a time
//!
//! ```text
//! loop:
//!   ① Tick due?  — the armed tick source yields Tick { epoch }.
//!   ② Otherwise  — block on the channel for Start / Reset / RouteFetched /
//!                  Shutdown until the next tick deadline.
//!   ③ Handle     — SimulationState::handle(event) → Vec<Effect>
//!                  (pure; no collaborator is touched).
//!   ④ Apply      — Controller executes each effect in order:
//!                    FetchRoute     → RouteFetcher (result re-enters as an event)
//!                    Arm/DisarmTicks→ TickSource
//!                    Step           → DisplaySink::report_position + observer
//!                    TriggerAlert   → AlertPlayer (errors logged, never fatal)
//! ```
//!
//! Every fetch and every armed tick source carries the controller's
//! [`Generation`][am_core::Generation]; `start` and `reset` advance it, so a
//! late route or a tick from a cancelled timer is dropped on arrival.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::sync::{Arc, mpsc};
//!
//! let (tx, rx) = mpsc::channel();
//! let fetcher = ThreadedFetcher::new(Arc::new(provider), tx.clone());
//! let mut controller = ControllerBuilder::new(display, alert, IntervalTicker::new(), fetcher)
//!     .config(config)
//!     .build()?;
//! tx.send(LoopMessage::Event(Event::Start))?;
//! run_event_loop(&mut controller, &rx, &mut NoopObserver, RunUntil::Settled);
//! ```

pub mod alert;
pub mod builder;
pub mod controller;
pub mod display;
pub mod error;
pub mod fetch;
pub mod hazard;
pub mod observer;
pub mod runner;
pub mod state;
pub mod tick;


pub use alert::{AlertError, AlertOutcome, AlertPlayer, DebouncedAlertPlayer, SoundEngine};
pub use builder::ControllerBuilder;
pub use controller::Controller;
pub use display::{DisplaySink, PermissionPrompt, PinRole};
pub use error::{SimError, SimResult};
pub use fetch::{RouteFetcher, RouteRequest, ThreadedFetcher};
pub use hazard::{HazardZone, Proximity};
pub use observer::{NoopObserver, SimObserver};
pub use runner::{LoopExit, LoopMessage, RunUntil, run_event_loop};
pub use state::{Effect, Event, Phase, SimParams, SimulationState, Step};
pub use tick::{IntervalTicker, TickSource};
