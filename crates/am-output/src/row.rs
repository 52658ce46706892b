/// One trace line: where the vehicle was on a tick and how close the hazard
/// was.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceRow {
    pub tick:              u64,
    pub elapsed_secs:      f64,
    pub lat:               f64,
    pub lon:               f64,
    pub hazard_distance_m: f64,
    /// Whether this tick requested an alert.
    pub alert:             bool,
}
