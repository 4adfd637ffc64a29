//! headless — run the grid-traffic simulation without a renderer.
//!
//! Steps a 3×3 grid for one simulated minute at the 30 Hz tick baseline,
//! printing periodic progress and writing CSV telemetry to `./output`.
//! A rendering host would drive the same API: one `step()` per frame when
//! unpaused, multiplier writes between ticks, `frame()` for drawing.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use gt_core::Tick;
use gt_output::{CsvObserver, CsvWriter};
use gt_sim::{Frame, SimObserver, TickSummary, WorldBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const COLS: u16 = 3;
const ROWS: u16 = 3;
const SEED: u64 = 5;
const TOTAL_TICKS: u64 = 1_800; // 60 s at 30 ticks/s
const PROGRESS_EVERY: u64 = 300;
const OUTPUT_DIR: &str = "output";

// ── Progress + telemetry observer ─────────────────────────────────────────────

struct Progress<O: SimObserver> {
    inner:   O,
    spawned: u64,
}

impl<O: SimObserver> SimObserver for Progress<O> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        self.spawned += summary.spawned as u64;
        if tick.0 % PROGRESS_EVERY == 0 {
            println!(
                "{tick}: {} vehicles on the grid, {} forced releases this tick",
                summary.vehicles, summary.forced_releases
            );
        }
        self.inner.on_tick_end(tick, summary);
    }

    fn on_frame(&mut self, tick: Tick, frame: &Frame) {
        self.inner.on_frame(tick, frame);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let out_dir = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out_dir)?;

    let mut world = WorldBuilder::new(COLS, ROWS)
        .seed(SEED)
        .frame_interval(30) // one telemetry frame per simulated second
        .build()?;

    // What an interactive host would do with its `]` / `+` keys.
    world.set_traffic(0.8);
    world.set_speed(0.9);

    let writer = CsvWriter::new(out_dir)?;
    let mut observer = Progress {
        inner:   CsvObserver::new(writer),
        spawned: 0,
    };

    let started = Instant::now();
    world.run_ticks(TOTAL_TICKS, &mut observer)?;
    let elapsed = started.elapsed();

    if let Some(e) = observer.inner.take_error() {
        eprintln!("telemetry write error: {e}");
    }

    let frame = world.frame();
    println!("---");
    println!(
        "{TOTAL_TICKS} ticks in {elapsed:?} ({:.0} ticks/s)",
        TOTAL_TICKS as f64 / elapsed.as_secs_f64()
    );
    println!(
        "{} vehicles admitted, {} still on the grid",
        observer.spawned,
        frame.vehicles.len()
    );
    for signal in &frame.signals {
        println!("  signal {}: {}", signal.cell, signal.phase);
    }
    println!("telemetry written to {}/", OUTPUT_DIR);

    Ok(())
}
