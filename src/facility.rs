use crate::aircraft::AircraftId;
use crate::time::Timestamp;
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;

pub type FacilityName = Arc<str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacilityKind {
    Runway,
    Terminal,
}

impl FacilityKind {
    /// Accepts `runway`/`r` and `terminal`/`t`, any case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "runway" | "runways" => Some(FacilityKind::Runway),
            "t" | "terminal" | "terminals" => Some(FacilityKind::Terminal),
            _ => None,
        }
    }
}

impl fmt::Display for FacilityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FacilityKind::Runway => write!(f, "runway"),
            FacilityKind::Terminal => write!(f, "terminal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacilityStatus {
    Available,
    Occupied,
}

impl fmt::Display for FacilityStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FacilityStatus::Available => write!(f, "available"),
            FacilityStatus::Occupied => write!(f, "occupied"),
        }
    }
}

/// Either free, or held by exactly one aircraft since a known time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Occupancy {
    Available,
    Occupied { aircraft: AircraftId, since: Timestamp },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Facility {
    pub name: FacilityName,
    pub occupancy: Occupancy,
}

impl Facility {
    pub fn new(name: FacilityName) -> Self {
        Facility { name, occupancy: Occupancy::Available }
    }

    pub fn status(&self) -> FacilityStatus {
        match self.occupancy {
            Occupancy::Available => FacilityStatus::Available,
            Occupancy::Occupied { .. } => FacilityStatus::Occupied,
        }
    }

    pub fn is_available(&self) -> bool {
        self.occupancy == Occupancy::Available
    }

    pub fn occupant(&self) -> Option<&AircraftId> {
        match &self.occupancy {
            Occupancy::Occupied { aircraft, .. } => Some(aircraft),
            Occupancy::Available => None,
        }
    }

    pub fn occupied_since(&self) -> Option<Timestamp> {
        match &self.occupancy {
            Occupancy::Occupied { since, .. } => Some(*since),
            Occupancy::Available => None,
        }
    }
}
