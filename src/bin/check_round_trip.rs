//! Check that every common lbs weight survives kilogram storage
//! Usage: cargo run --bin check_round_trip -- [tolerance]

use liftlog::tools::weights::plate_round_trip;
use liftlog::weights::DEFAULT_SNAP_TOLERANCE;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let tolerance = match args.get(1) {
        Some(s) => s.parse::<f64>()?,
        None => DEFAULT_SNAP_TOLERANCE,
    };

    let report = plate_round_trip(tolerance);
    println!("Checking {} common weights (tolerance {} lbs)", report.total, report.tolerance);

    for entry in &report.entries {
        let marker = if entry.drifted { "DRIFT" } else { "ok" };
        println!(
            "  {:>7.1} lbs -> {:>9.4} kg -> {:>7.1} lbs  {}",
            entry.lbs, entry.stored_kg, entry.recovered_with_tolerance, marker
        );
    }

    if report.drifted > 0 {
        return Err(format!("{} of {} weights drifted", report.drifted, report.total).into());
    }

    println!("All weights recovered");
    Ok(())
}
