use crate::aircraft::{self, AircraftId};
use crate::error::ApronError;
use crate::facility::FacilityKind;
use crate::time::Timestamp;
use serde::Serialize;
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;
use tabled::Tabled;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    WaitingAssignment,
    AssignedRunway,
    AssignedTerminal,
}

impl AssignmentStatus {
    pub fn assigned_to(kind: FacilityKind) -> Self {
        match kind {
            FacilityKind::Runway => AssignmentStatus::AssignedRunway,
            FacilityKind::Terminal => AssignmentStatus::AssignedTerminal,
        }
    }

    pub fn is_waiting(&self) -> bool {
        *self == AssignmentStatus::WaitingAssignment
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentStatus::WaitingAssignment => write!(f, "waiting"),
            AssignmentStatus::AssignedRunway => write!(f, "runway"),
            AssignmentStatus::AssignedTerminal => write!(f, "terminal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct ArrivalRecord {
    #[tabled(rename = "Aircraft")]
    pub aircraft_id: AircraftId,
    #[tabled(rename = "Flight")]
    pub flight_number: Arc<str>,
    #[tabled(rename = "Origin")]
    pub origin: Arc<str>,
    #[tabled(rename = "Arrived")]
    pub arrival_time: Timestamp,
    #[tabled(rename = "Status")]
    pub status: AssignmentStatus,
}

/// Registers an incoming aircraft, stamped with the current wall-clock time.
pub fn register(aircraft_id: &str, flight_number: &str, origin: &str) -> Result<ArrivalRecord, ApronError> {
    register_at(aircraft_id, flight_number, origin, Timestamp::now())
}

/// Like [`register`], for callers whose fields may be missing altogether.
pub fn register_fields(
    aircraft_id: Option<&str>,
    flight_number: Option<&str>,
    origin: Option<&str>,
) -> Result<ArrivalRecord, ApronError> {
    register(
        aircraft_id.unwrap_or_default(),
        flight_number.unwrap_or_default(),
        origin.unwrap_or_default(),
    )
}

pub fn register_at(
    aircraft_id: &str,
    flight_number: &str,
    origin: &str,
    arrival_time: Timestamp,
) -> Result<ArrivalRecord, ApronError> {
    let required = |raw: &str, field: &'static str| {
        aircraft::normalize(raw).ok_or(ApronError::InvalidInput { field })
    };
    Ok(ArrivalRecord {
        aircraft_id: required(aircraft_id, "aircraft id")?,
        flight_number: required(flight_number, "flight number")?,
        origin: required(origin, "origin")?,
        arrival_time,
        status: AssignmentStatus::WaitingAssignment,
    })
}

/// Every arrival in registration order. Records are never removed.
#[derive(Debug, Default)]
pub struct ArrivalLog {
    records: Vec<ArrivalRecord>,
}

impl ArrivalLog {
    pub fn push(&mut self, record: ArrivalRecord) -> &ArrivalRecord {
        let idx = self.records.len();
        self.records.push(record);
        &self.records[idx]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArrivalRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn waiting_count(&self) -> usize {
        self.records.iter().filter(|r| r.status.is_waiting()).count()
    }

    /// First record, in log order, still waiting for a facility.
    pub fn next_waiting(&mut self) -> Option<&mut ArrivalRecord> {
        self.records.iter_mut().find(|r| r.status.is_waiting())
    }

    pub fn as_slice(&self) -> &[ArrivalRecord] {
        &self.records
    }
}
