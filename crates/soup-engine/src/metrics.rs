//! Per-tick timing collected by the chamber.

/// Timing metrics collected during a single tick.
///
/// All durations are in microseconds. The chamber overwrites these after
/// each `step()`, reusing the `rule_us` buffer; read them with
/// [`Chamber::last_metrics`](crate::Chamber::last_metrics).
#[derive(Clone, Debug, Default)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Per-rule execution times: `(name, microseconds)`, in pipeline order.
    pub rule_us: Vec<(&'static str, u64)>,
}
