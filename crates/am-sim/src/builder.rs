//! Fluent builder for constructing a [`Controller`].

use am_core::{DemoConfig, SimClock};

use crate::alert::AlertPlayer;
use crate::display::DisplaySink;
use crate::fetch::RouteFetcher;
use crate::hazard::HazardZone;
use crate::state::{SimParams, SimulationState};
use crate::tick::TickSource;
use crate::{Controller, SimResult};

/// Fluent builder for [`Controller<D, A, T, F>`].
///
/// # Required inputs
///
/// - `D: DisplaySink`, `A: AlertPlayer`, `T: TickSource`, `F: RouteFetcher`
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                  |
/// |---------------|--------------------------|
/// | `.config(c)`  | `DemoConfig::default()`  |
///
/// # Example
///
/// ```rust,ignore
/// let mut controller = ControllerBuilder::new(display, alert, IntervalTicker::new(), fetcher)
///     .config(config)
///     .build()?;
/// controller.start(&mut NoopObserver);
/// ```
pub struct ControllerBuilder<D, A, T, F>
where
    D: DisplaySink,
    A: AlertPlayer,
    T: TickSource,
    F: RouteFetcher,
{
    config:  Option<DemoConfig>,
    display: D,
    alert:   A,
    ticks:   T,
    fetcher: F,
}

impl<D, A, T, F> ControllerBuilder<D, A, T, F>
where
    D: DisplaySink,
    A: AlertPlayer,
    T: TickSource,
    F: RouteFetcher,
{
    /// Create a builder with all required collaborators.
    pub fn new(display: D, alert: A, ticks: T, fetcher: F) -> Self {
        Self {
            config: None,
            display,
            alert,
            ticks,
            fetcher,
        }
    }

    /// Supply coordinates, hazard radius, and tick period.
    pub fn config(mut self, config: DemoConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Validate the configuration and return an idle [`Controller`].
    pub fn build(self) -> SimResult<Controller<D, A, T, F>> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let clock = SimClock::new(config.tick_period_ms);
        Ok(Controller {
            params: SimParams {
                start:  config.start,
                end:    config.end,
                hazard: HazardZone::new(config.hazard, config.hazard_radius_m),
            },
            tick_period:    clock.period(),
            initial_span_m: config.initial_span_m,
            state:          SimulationState::default(),
            clock,
            display:        self.display,
            alert:          self.alert,
            ticks:          self.ticks,
            fetcher:        self.fetcher,
        })
    }
}
