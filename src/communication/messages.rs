use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::simulation_engine::approaches::Approach;
use crate::simulation_engine::simulation::{Simulation, StepStatus};

/// One command from the input document, in its external JSON shape:
/// `{"type": "addVehicle", "vehicleId": ..., "startRoad": ..., "endRoad": ...}`
/// or `{"type": "step"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    #[serde(rename_all = "camelCase")]
    AddVehicle {
        vehicle_id: String,
        start_road: Approach,
        end_road: Approach,
    },
    Step,
}

/// Top-level input document, as written by generators.
#[derive(Debug, Serialize)]
pub struct CommandFile {
    pub commands: Vec<Command>,
}

/// Output document: one status per step command, in execution order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    pub step_statuses: Vec<StepStatus>,
}

/// Parses a command file, dropping entries that fail shape validation.
///
/// The document itself must be valid JSON with a top-level `commands`
/// array; each entry is then validated on its own, so one command with an
/// unknown type tag, a missing field or an unrecognized road name is
/// skipped with a warning instead of poisoning the whole file.
pub fn parse_command_file(input: &str) -> Result<Vec<Command>, serde_json::Error> {
    #[derive(Deserialize)]
    struct RawCommandFile {
        commands: Vec<Value>,
    }

    let raw: RawCommandFile = serde_json::from_str(input)?;
    let mut commands = Vec::with_capacity(raw.commands.len());
    for (index, entry) in raw.commands.into_iter().enumerate() {
        match serde_json::from_value::<Command>(entry) {
            Ok(command) => commands.push(command),
            Err(err) => warn!("skipping malformed command #{}: {}", index, err),
        }
    }
    Ok(commands)
}

/// Feeds a command sequence through the simulation and collects one status
/// per step command. Add commands produce no output of their own.
pub fn run_commands(simulation: &mut Simulation, commands: &[Command]) -> RunResult {
    let mut step_statuses = Vec::new();
    for command in commands {
        match command {
            Command::AddVehicle {
                vehicle_id,
                start_road,
                end_road,
            } => simulation.add_vehicle(vehicle_id, *start_road, *end_road),
            Command::Step => step_statuses.push(simulation.step()),
        }
    }
    RunResult { step_statuses }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_both_command_kinds() {
        let input = r#"{
            "commands": [
                {"type": "addVehicle", "vehicleId": "v1", "startRoad": "south", "endRoad": "north"},
                {"type": "step"}
            ]
        }"#;

        let commands = parse_command_file(input).unwrap();
        assert_eq!(
            commands,
            vec![
                Command::AddVehicle {
                    vehicle_id: "v1".to_string(),
                    start_road: Approach::South,
                    end_road: Approach::North,
                },
                Command::Step,
            ]
        );
    }

    #[test]
    fn malformed_entries_are_skipped_not_fatal() {
        let input = r#"{
            "commands": [
                {"type": "addVehicle", "vehicleId": "ok", "startRoad": "north", "endRoad": "east"},
                {"type": "addVehicle", "vehicleId": "bad", "startRoad": "northeast", "endRoad": "east"},
                {"type": "teleportVehicle", "vehicleId": "bad2"},
                {"type": "addVehicle", "vehicleId": "incomplete", "startRoad": "north"},
                {"type": "step"}
            ]
        }"#;

        let commands = parse_command_file(input).unwrap();
        assert_eq!(commands.len(), 2);
        assert!(matches!(
            &commands[0],
            Command::AddVehicle { vehicle_id, .. } if vehicle_id == "ok"
        ));
        assert_eq!(commands[1], Command::Step);
    }

    #[test]
    fn unparseable_document_is_an_error() {
        assert!(parse_command_file("not json at all").is_err());
        assert!(parse_command_file(r#"{"noCommands": []}"#).is_err());
    }

    #[test]
    fn commands_serialize_in_the_wire_shape() {
        let command = Command::AddVehicle {
            vehicle_id: "v7".to_string(),
            start_road: Approach::West,
            end_road: Approach::South,
        };
        assert_eq!(
            serde_json::to_value(&command).unwrap(),
            json!({
                "type": "addVehicle",
                "vehicleId": "v7",
                "startRoad": "west",
                "endRoad": "south"
            })
        );
        assert_eq!(
            serde_json::to_value(Command::Step).unwrap(),
            json!({"type": "step"})
        );
    }

    #[test]
    fn run_collects_one_status_per_step_command() {
        let input = r#"{
            "commands": [
                {"type": "addVehicle", "vehicleId": "v1", "startRoad": "south", "endRoad": "north"},
                {"type": "addVehicle", "vehicleId": "v2", "startRoad": "north", "endRoad": "south"},
                {"type": "step"},
                {"type": "step"}
            ]
        }"#;
        let commands = parse_command_file(input).unwrap();
        let mut simulation = Simulation::new();

        let result = run_commands(&mut simulation, &commands);

        // North releases before south within the step.
        assert_eq!(result.step_statuses.len(), 2);
        assert_eq!(
            result.step_statuses[0].left_vehicles,
            vec!["v2".to_string(), "v1".to_string()]
        );
        assert!(result.step_statuses[1].left_vehicles.is_empty());
    }

    #[test]
    fn result_serializes_in_the_wire_shape() {
        let result = RunResult {
            step_statuses: vec![
                StepStatus {
                    left_vehicles: vec!["a".to_string(), "b".to_string()],
                },
                StepStatus {
                    left_vehicles: Vec::new(),
                },
            ],
        };

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "stepStatuses": [
                    {"leftVehicles": ["a", "b"]},
                    {"leftVehicles": []}
                ]
            })
        );
    }
}
