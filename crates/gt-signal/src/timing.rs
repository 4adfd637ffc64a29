//! Timing and threshold parameters for the signal controller.

/// Durations (in ticks) and counts governing the six arbitration rules.
/// Defaults are calibrated for a 30-tick-per-second host.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalTiming {
    /// Minimum green duration before any cutoff rule may fire (1.5 s).
    pub min_green: u32,
    /// Yellow clearance duration (0.6 s).
    pub yellow: u32,
    /// Accumulated red-axis demand that triggers a cutoff.
    pub demand_threshold: u32,
    /// Upper bound on the "few vehicles about to cross" extension: a green
    /// axis with 1..=few_crossing vehicles near the line defers the cutoff.
    pub few_crossing: u32,
    /// Consecutive both-axes-blocked ticks before forcing ALL_RED (0.8 s).
    pub sustained_block: u32,
    /// ALL_RED dwell before a forced release (2.5 s).
    pub forced_release: u32,
}

impl Default for SignalTiming {
    fn default() -> Self {
        Self {
            min_green:        45,
            yellow:           18,
            demand_threshold: 16,
            few_crossing:     2,
            sustained_block:  24,
            forced_release:   75,
        }
    }
}
