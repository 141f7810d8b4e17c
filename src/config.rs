use crate::error::ApronError;
use serde::Deserialize;
use std::path::Path;

/// Named facilities the tower manages. Fixed for the life of the process.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AirportLayout {
    pub runways: Vec<String>,
    pub terminals: Vec<String>,
}

impl Default for AirportLayout {
    fn default() -> Self {
        AirportLayout {
            runways: ["Runway_01", "Runway_02", "Runway_03"].map(String::from).to_vec(),
            terminals: ["Terminal_A", "Terminal_B", "Terminal_C", "Terminal_D"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl AirportLayout {
    pub fn load_from_file(path: &Path) -> Result<Self, ApronError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, ApronError> {
        Ok(serde_json::from_str(data)?)
    }
}
