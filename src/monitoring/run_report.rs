use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::simulation_engine::simulation::StepStatus;

/// One CSV row per executed step.
#[derive(Debug, Serialize)]
pub struct StepRecord {
    pub step: usize,
    pub departed: usize,
    pub vehicle_ids: String,
}

/// Writes the per-step report for a finished run, one record per step in
/// execution order. The file is recreated on every run and always starts
/// with the header row, even when the run had no steps.
pub fn write_step_report(path: &Path, statuses: &[StepStatus]) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    write_records(file, statuses)
}

fn write_records<W: Write>(writer: W, statuses: &[StepStatus]) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);
    // serialize only emits the header alongside the first record, so a
    // stepless run writes it by hand. Names match StepRecord's fields.
    if statuses.is_empty() {
        wtr.write_record(["step", "departed", "vehicle_ids"])?;
    }
    for (index, status) in statuses.iter().enumerate() {
        wtr.serialize(StepRecord {
            step: index + 1,
            departed: status.left_vehicles.len(),
            vehicle_ids: status.left_vehicles.join(" "),
        })?;
    }
    wtr.flush()?;
    Ok(())
}
