use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::decision::SettlementDecision;
use crate::model::ThreatLevel;

/// Computed danger level for a location, ready for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationAssessment {
    pub location_id: u64,
    pub name: String,
    pub danger_level: f64,
    pub threat: ThreatLevel,
}

/// Computed danger level for a travel link, ready for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelAssessment {
    pub link_id: u64,
    pub name: String,
    pub danger_level: f64,
    pub threat: ThreatLevel,
}

/// One settlement's decision outcome for the cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub settlement_id: u64,
    #[serde(flatten)]
    pub decision: SettlementDecision,
}

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Flush one assessment cycle to JSONL files in the given output directory.
///
/// Creates the output directory if it does not exist. Writes 3 files:
/// - `location_danger.jsonl` — one LocationAssessment per line
/// - `travel_danger.jsonl` — one TravelAssessment per line
/// - `decisions.jsonl` — one DecisionRecord per line
pub fn flush_assessments(
    output_dir: &Path,
    locations: &[LocationAssessment],
    travel: &[TravelAssessment],
    decisions: &[DecisionRecord],
) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(&output_dir.join("location_danger.jsonl"), locations.iter())?;
    write_jsonl(&output_dir.join("travel_danger.jsonl"), travel.iter())?;
    write_jsonl(&output_dir.join("decisions.jsonl"), decisions.iter())?;

    Ok(())
}
