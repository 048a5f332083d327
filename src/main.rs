/*!
 * Dynamic-Quantum Round-Robin Simulator - Main Entry Point
 *
 * Deterministic replay of a process batch under a round-robin discipline
 * whose time quantum grows with scheduling frequency:
 * - Interactive collection of burst/arrival times and the base quantum
 * - Virtual-clock dispatch loop to batch completion
 * - Per-process timing table and truncated batch averages
 */

use std::error::Error;
use std::io;
use tracing::info;

use dqrr_sim::{init_tracing, read_config, render_report, Scheduler};

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize structured tracing
    init_tracing();

    info!("dqrr-sim starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let config = read_config(&mut stdin.lock(), &mut stdout.lock())?;

    let mut scheduler = Scheduler::new(config)?;
    scheduler.run();

    let report = render_report(scheduler.records(), scheduler.metrics());
    print!("\n{report}");

    info!("Simulation finished at tick {}", scheduler.clock());
    Ok(())
}
