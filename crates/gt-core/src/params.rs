//! Named tuning parameters for the motion model and the sensing windows.
//!
//! All distances are in world units (the default intersection spacing is
//! 1.6 units), all speeds in units per tick.  Defaults are calibrated for a
//! 30-tick-per-second host.  Gap thresholds are expressed as multiples of
//! the vehicle length and resolved through the accessor methods so every
//! call site compares against the same absolute value.

// ── MotionProfile ─────────────────────────────────────────────────────────────

/// Kinematics and gap tolerances for the per-lane motion pass.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionProfile {
    /// Virtual vehicle length used for all spacing rules.
    pub vehicle_length: f64,
    /// Cruise speed per tick at speed multiplier 1.0.
    pub base_speed: f64,
    /// Lowest crawl speed inside a commit zone; a committed vehicle never
    /// moves slower than this while it has room.
    pub crawl_floor: f64,
    /// Fraction of the desired speed used when crawling through a crossing.
    pub crawl_fraction: f64,
    /// Spawn admission: required clearance from the lane start to the
    /// nearest vehicle, in vehicle lengths.
    pub spawn_gap_lengths: f64,
    /// Minimum following distance, in vehicle lengths.
    pub follow_gap_lengths: f64,
    /// How close to a stop line a vehicle must be before the signal (or the
    /// admission rule) applies, in vehicle lengths.
    pub line_reach_lengths: f64,
    /// A committed vehicle keeps crawling while the gap ahead exceeds this
    /// many vehicle lengths; below it, it halts rather than close further.
    pub crawl_room_lengths: f64,
    /// Admission with one vehicle stopped downstream requires a free gap of
    /// at least this many vehicle lengths just past the line.
    pub entry_clear_lengths: f64,
    /// How far past the lane end a vehicle travels before removal.
    pub exit_overshoot: f64,
    /// Depth of the no-stop zone past a stop line (≈ the crossing width);
    /// the commit coordinate is the stop line plus this, in travel
    /// direction.
    pub commit_depth: f64,
    /// Velocities below this magnitude count as "stopped" for jam sensing.
    pub halt_epsilon: f64,
}

impl Default for MotionProfile {
    fn default() -> Self {
        Self {
            vehicle_length:     0.08,
            base_speed:         0.020,
            crawl_floor:        0.006,
            crawl_fraction:     0.6,
            spawn_gap_lengths:  4.0,
            follow_gap_lengths: 1.2,
            line_reach_lengths: 1.05,
            crawl_room_lengths: 0.9,
            entry_clear_lengths: 1.0,
            exit_overshoot:     0.1,
            commit_depth:       0.28,
            halt_epsilon:       1e-3,
        }
    }
}

impl MotionProfile {
    /// Absolute spawn clearance required at the lane start.
    #[inline]
    pub fn spawn_clearance(&self) -> f64 {
        self.vehicle_length * self.spawn_gap_lengths
    }

    /// Absolute minimum following distance.
    #[inline]
    pub fn follow_gap(&self) -> f64 {
        self.vehicle_length * self.follow_gap_lengths
    }

    /// Absolute distance at which a stop line takes effect.
    #[inline]
    pub fn line_reach(&self) -> f64 {
        self.vehicle_length * self.line_reach_lengths
    }

    /// Absolute gap below which a committed vehicle stops crawling.
    #[inline]
    pub fn crawl_room(&self) -> f64 {
        self.vehicle_length * self.crawl_room_lengths
    }

    /// Absolute free gap required past the line for single-jam admission.
    #[inline]
    pub fn entry_clearance(&self) -> f64 {
        self.vehicle_length * self.entry_clear_lengths
    }
}

// ── SenseWindows ──────────────────────────────────────────────────────────────

/// Distance windows around a stop line used by the counting queries.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SenseWindows {
    /// Pre-line window for demand and gap-out sensing.
    pub approach: f64,
    /// Very-near-line window for the cutoff extension rule.
    pub near_line: f64,
    /// Post-line window for jam detection.
    pub downstream: f64,
}

impl Default for SenseWindows {
    fn default() -> Self {
        Self {
            approach:   0.55,
            near_line:  0.15,
            downstream: 0.12,
        }
    }
}
