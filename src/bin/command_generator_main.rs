// command_generator_main.rs
use std::env;
use std::error::Error;
use std::fs;
use std::process;

use junction_sim::communication::messages::{Command, CommandFile};
use junction_sim::simulation_engine::approaches::ALL_APPROACHES;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: command_generator_main <output.json> [vehicles] [steps] [seed]");
        process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("Error generating commands: {}", e);
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let vehicles: usize = match args.get(2) {
        Some(raw) => raw.parse()?,
        None => 20,
    };
    let steps: usize = match args.get(3) {
        Some(raw) => raw.parse()?,
        None => 30,
    };
    let mut rng = match args.get(4) {
        Some(raw) => StdRng::seed_from_u64(raw.parse()?),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let commands = generate_commands(&mut rng, vehicles, steps);
    let file = CommandFile { commands };
    fs::write(&args[1], serde_json::to_string_pretty(&file)?)?;
    info!(
        "wrote {} add commands and {} steps to {}",
        vehicles, steps, args[1]
    );
    Ok(())
}

/// Shuffles `vehicles` add commands in between `steps` step commands, with
/// arrivals spread proportionally so traffic trickles in over the whole
/// run. Start and end roads are drawn uniformly; U-turns are as valid as
/// any other route.
fn generate_commands(rng: &mut StdRng, vehicles: usize, steps: usize) -> Vec<Command> {
    let mut commands = Vec::with_capacity(vehicles + steps);
    let mut vehicles_left = vehicles;
    let mut steps_left = steps;
    let mut next_id = 1;

    while vehicles_left > 0 || steps_left > 0 {
        let add_next = if steps_left == 0 {
            true
        } else if vehicles_left == 0 {
            false
        } else {
            let odds = vehicles_left as f64 / (vehicles_left + steps_left) as f64;
            rng.random_bool(odds)
        };

        if add_next {
            let start_road = ALL_APPROACHES[rng.random_range(0..ALL_APPROACHES.len())];
            let end_road = ALL_APPROACHES[rng.random_range(0..ALL_APPROACHES.len())];
            commands.push(Command::AddVehicle {
                vehicle_id: format!("vehicle{}", next_id),
                start_road,
                end_road,
            });
            next_id += 1;
            vehicles_left -= 1;
        } else {
            commands.push(Command::Step);
            steps_left -= 1;
        }
    }

    commands
}
