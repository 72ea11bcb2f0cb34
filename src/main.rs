// main.rs
use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::process;

use junction_sim::communication::messages::{parse_command_file, run_commands, Command};
use junction_sim::monitoring::run_report::write_step_report;
use junction_sim::simulation_engine::simulation::Simulation;
use log::{info, warn};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: junction_sim <input.json> <output.json> [report.csv]");
        process::exit(1);
    }

    let input_path = &args[1];
    if !Path::new(input_path).exists() {
        eprintln!("Input file not found: {}", input_path);
        process::exit(1);
    }

    if let Err(e) = run(input_path, &args[2], args.get(3)) {
        eprintln!("Error during simulation: {}", e);
        process::exit(1);
    }
}

fn run(
    input_path: &str,
    output_path: &str,
    report_path: Option<&String>,
) -> Result<(), Box<dyn Error>> {
    let input = fs::read_to_string(input_path)?;
    let commands = parse_command_file(&input)?;
    info!("loaded {} commands from {}", commands.len(), input_path);

    let mut simulation = Simulation::new();
    let result = run_commands(&mut simulation, &commands);

    fs::write(output_path, serde_json::to_string_pretty(&result)?)?;

    let added = commands
        .iter()
        .filter(|c| matches!(c, Command::AddVehicle { .. }))
        .count();
    let departed: usize = result
        .step_statuses
        .iter()
        .map(|status| status.left_vehicles.len())
        .sum();
    info!(
        "run finished: {} vehicles added, {} steps, {} departed, {} still queued",
        added,
        result.step_statuses.len(),
        departed,
        simulation.queued_vehicles()
    );

    if let Some(report) = report_path {
        if let Err(e) = write_step_report(Path::new(report), &result.step_statuses) {
            warn!("could not write step report {}: {}", report, e);
        }
    }

    Ok(())
}
