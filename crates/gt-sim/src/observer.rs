//! Observer trait for progress reporting and data collection.

use gt_core::Tick;

use crate::{Frame, TickSummary};

/// Callbacks invoked by [`World::run_ticks`][crate::World::run_ticks]
/// around each tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} vehicles", summary.vehicles);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called immediately before a tick executes.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after a tick with its summary.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called at the configured frame interval with the presentation
    /// snapshot for the tick that just ran.
    fn on_frame(&mut self, _tick: Tick, _frame: &Frame) {}

    /// Called once when `run_ticks` returns.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call
/// `run_ticks` but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
