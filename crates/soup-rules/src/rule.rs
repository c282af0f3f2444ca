//! The [`TransitionRule`] trait.
//!
//! Transition rules are stateless, local update operators executed in a
//! fixed order each tick. Each one declares the channels it reads and
//! writes so the pipeline can check them against the grid's channel table
//! before the first tick.

use soup_core::ChannelSet;
use soup_grid::TileGrid;

/// One per-tick local update rule.
///
/// # Contract
///
/// - `apply()` MUST be deterministic: the same grid produces the same result.
/// - `apply()` is total over well-shaped numeric input; it never fails.
/// - Updates within one `apply()` are synchronous: every delta is computed
///   from the grid as it was when the rule started, then applied together.
/// - `&self`: rules are stateless; all state lives in the grid.
///
/// # Object safety
///
/// The trait is object-safe; the pipeline stores rules as
/// `Vec<Box<dyn TransitionRule>>`.
///
/// # Examples
///
/// ```
/// use soup_core::{ChannelSet, MOISTURE};
/// use soup_grid::TileGrid;
/// use soup_rules::TransitionRule;
///
/// struct Evaporate;
///
/// impl TransitionRule for Evaporate {
///     fn name(&self) -> &'static str { "evaporate" }
///     fn reads(&self) -> ChannelSet { [MOISTURE].into_iter().collect() }
///     fn writes(&self) -> ChannelSet { [MOISTURE].into_iter().collect() }
///     fn apply(&self, grid: &mut TileGrid) {
///         grid.channel_mut(MOISTURE).scale(0.9);
///     }
/// }
///
/// let mut grid = TileGrid::standard(2, 2).unwrap();
/// grid.channel_mut(MOISTURE).fill(1.0);
/// Evaporate.apply(&mut grid);
/// assert_eq!(grid[MOISTURE][(0, 0)], 0.9);
/// ```
pub trait TransitionRule: Send + 'static {
    /// Human-readable name for logging and metrics.
    ///
    /// Static so per-tick timings can carry it without allocating.
    fn name(&self) -> &'static str;

    /// Channels this rule reads.
    fn reads(&self) -> ChannelSet;

    /// Channels this rule writes.
    fn writes(&self) -> ChannelSet;

    /// Advance the grid by this rule's share of one tick.
    ///
    /// Sees the grid exactly as the previous rule in the pipeline left it.
    fn apply(&self, grid: &mut TileGrid);
}
