/*!
 * Round-Robin Simulator - Main Entry Point
 *
 * Usage: rr-sim <scenario.json> [TAG]
 *
 * Loads a scenario, runs it once, and prints the trace as JSON lines on
 * stdout, optionally filtered by a transition tag (TODO for everything).
 * In partition mode the finalization report follows the trace.
 */

use miette::{miette, IntoDiagnostic, Result};
use rr_sim::{init_tracing, Filter, Scenario, SimulationMode};
use std::io::{BufWriter, Write};
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .ok_or_else(|| miette!("usage: rr-sim <scenario.json> [TAG]"))?;
    let filter: Filter = match args.next() {
        Some(tag) => tag.parse().map_err(|e: String| miette!("{}", e))?,
        None => Filter::All,
    };

    let mut engine = Scenario::from_path(&path)?.into_engine()?;
    let summary = engine.run()?;
    info!(scenario = %path, filter = %filter, "Writing trace");

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for entry in engine.logs_by(filter) {
        serde_json::to_writer(&mut out, &entry).into_diagnostic()?;
        writeln!(out).into_diagnostic()?;
    }

    if engine.mode() == SimulationMode::Partition {
        for row in engine.partition_report() {
            serde_json::to_writer(&mut out, &row).into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
        }
    }

    serde_json::to_writer(&mut out, &summary).into_diagnostic()?;
    writeln!(out).into_diagnostic()?;
    out.flush().into_diagnostic()?;
    Ok(())
}
