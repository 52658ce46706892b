//! The simulation state machine.
//!
//! [`SimulationState::handle`] is a pure transition: it consumes the current
//! state and one [`Event`] and returns the next state plus the [`Effect`]s the
//! controller must carry out.  No collaborator is touched here, which keeps
//! every transition testable without a display, a timer, or a sound engine.
//!
//! ```text
//!            Start                 RouteFetched(ok, non-empty)
//!   Idle ───────────▶ Idle+pending ─────────────────────────▶ Running
//!    ▲                                                          │ Tick
//!    │ Reset (from any phase)                                   ▼
//!    └──────────────────────────────────────────────  Finished ◀┘ (cursor == len)
//! ```

use am_core::{Coordinate, Generation};
use am_route::{Route, RouteResult};

use crate::fetch::RouteRequest;
use crate::hazard::{HazardZone, Proximity};

// ── Inputs and outputs ────────────────────────────────────────────────────────

/// Something the event loop delivers to the simulation.
#[derive(Debug)]
pub enum Event {
    /// User command: fetch a route and follow it.
    Start,
    /// User command: halt, clear, and return to the start coordinate.
    Reset,
    /// A route fetch completed.  `generation` is the one stamped on the
    /// request.
    RouteFetched {
        generation: Generation,
        result:     RouteResult<Route>,
    },
    /// The tick source armed for `epoch` fired.
    Tick { epoch: Generation },
}

/// One advance of the cursor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step {
    /// Index into the route of the reported point.
    pub index: usize,
    pub position: Coordinate,
    pub proximity: Proximity,
}

/// Side effects requested by a transition, in the order they must run.
#[derive(Debug, PartialEq)]
pub enum Effect {
    /// Dispatch an asynchronous route fetch.
    FetchRoute(RouteRequest),
    /// Activate a periodic tick source tagged with this epoch.
    ArmTicks(Generation),
    /// Deactivate the tick source.  No-op if none is active.
    DisarmTicks,
    /// Draw the newly received route.
    ShowRoute,
    /// Report the position the cursor just advanced to.
    Step(Step),
    /// The current position is inside the hazard zone.
    TriggerAlert,
    /// The last point was reported after `points` ticks.
    Finished { points: usize },
    /// Return the display to the start coordinate.
    Recentered(Coordinate),
}

/// Constants a transition needs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimParams {
    pub start: Coordinate,
    pub end: Coordinate,
    pub hazard: HazardZone,
}

// ── Phase ─────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Finished,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Finished => "finished",
        };
        f.write_str(s)
    }
}

// ── SimulationState ───────────────────────────────────────────────────────────

/// Everything the simulator knows about the current run.
///
/// Invariants: `cursor <= route.len()`; `phase == Running` exactly while a
/// tick source armed for `generation` is active.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationState {
    pub phase: Phase,
    pub route: Route,
    pub cursor: usize,
    /// Current run tag.  Advanced by `Start` and `Reset`.
    pub generation: Generation,
    /// Generation of the fetch still in flight, if any.
    pub pending: Option<Generation>,
}

impl SimulationState {
    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// The point reported by the most recent tick of this run.
    pub fn current_position(&self) -> Option<Coordinate> {
        self.cursor.checked_sub(1).and_then(|i| self.route.get(i))
    }

    /// Apply `event` and return the next state plus its effects.
    pub fn handle(self, event: Event, params: &SimParams) -> (SimulationState, Vec<Effect>) {
        match event {
            Event::Start => self.start(params),
            Event::Reset => self.reset(params),
            Event::RouteFetched { generation, result } => self.route_fetched(generation, result),
            Event::Tick { epoch } => self.tick(epoch, params),
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Cancel whatever is running and request a fresh route.
    fn start(self, params: &SimParams) -> (SimulationState, Vec<Effect>) {
        let generation = self.generation.next();
        let mut effects = Vec::with_capacity(2);
        if self.is_running() {
            effects.push(Effect::DisarmTicks);
        }
        effects.push(Effect::FetchRoute(RouteRequest {
            generation,
            from: params.start,
            to:   params.end,
        }));

        let next = SimulationState {
            phase:   Phase::Idle,
            route:   Route::empty(),
            cursor:  0,
            generation,
            pending: Some(generation),
        };
        (next, effects)
    }

    fn reset(self, params: &SimParams) -> (SimulationState, Vec<Effect>) {
        let next = SimulationState {
            generation: self.generation.next(),
            ..SimulationState::default()
        };
        (next, vec![Effect::DisarmTicks, Effect::Recentered(params.start)])
    }

    fn route_fetched(
        mut self,
        generation: Generation,
        result: RouteResult<Route>,
    ) -> (SimulationState, Vec<Effect>) {
        if self.pending != Some(generation) {
            log::warn!(
                "discarding route for {generation}: current run is {}",
                self.generation
            );
            return (self, vec![]);
        }
        self.pending = None;

        let route = match result {
            Ok(route) => route,
            Err(e) => {
                log::warn!("route unavailable: {e}");
                return (self, vec![]);
            }
        };
        if route.is_empty() {
            log::warn!("route for {generation} has no points; staying idle");
            return (self, vec![]);
        }

        self.phase = Phase::Running;
        self.route = route;
        self.cursor = 0;
        (self, vec![Effect::ShowRoute, Effect::ArmTicks(generation)])
    }

    fn tick(mut self, epoch: Generation, params: &SimParams) -> (SimulationState, Vec<Effect>) {
        if !self.is_running() || epoch != self.generation {
            log::debug!("ignoring tick from {epoch} while {} in {}", self.phase, self.generation);
            return (self, vec![]);
        }
        let Some(position) = self.route.get(self.cursor) else {
            // Unreachable while Running, but never report past the end.
            self.phase = Phase::Finished;
            return (self, vec![Effect::DisarmTicks]);
        };

        let proximity = params.hazard.check(position);
        let mut effects = vec![Effect::Step(Step { index: self.cursor, position, proximity })];
        if proximity.inside {
            effects.push(Effect::TriggerAlert);
        }

        self.cursor += 1;
        if self.cursor >= self.route.len() {
            self.phase = Phase::Finished;
            effects.push(Effect::DisarmTicks);
            effects.push(Effect::Finished { points: self.route.len() });
        }
        (self, effects)
    }
}
