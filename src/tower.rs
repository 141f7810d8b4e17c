use crate::aircraft::AircraftId;
use crate::arrival::{self, ArrivalLog, ArrivalRecord, AssignmentStatus};
use crate::config::AirportLayout;
use crate::error::{ApronError, Denied};
use crate::facility::{Facility, FacilityKind, FacilityName};
use crate::registry::Registry;
use tracing::{info, warn};

#[derive(Debug)]
pub struct Assignment {
    pub aircraft: AircraftId,
    pub facility: FacilityName,
    pub kind: FacilityKind,
}

/// Owns both registries and the arrival log. One operation at a time;
/// callers that share a tower across threads must wrap it themselves.
pub struct Tower {
    runways: Registry,
    terminals: Registry,
    pub arrivals: ArrivalLog,
}

impl Tower {
    pub fn new(layout: &AirportLayout) -> Result<Tower, ApronError> {
        Ok(Tower {
            runways: Registry::new(FacilityKind::Runway, &layout.runways)?,
            terminals: Registry::new(FacilityKind::Terminal, &layout.terminals)?,
            arrivals: ArrivalLog::default(),
        })
    }

    pub fn registry(&self, kind: FacilityKind) -> &Registry {
        match kind {
            FacilityKind::Runway => &self.runways,
            FacilityKind::Terminal => &self.terminals,
        }
    }

    fn registry_mut(&mut self, kind: FacilityKind) -> &mut Registry {
        match kind {
            FacilityKind::Runway => &mut self.runways,
            FacilityKind::Terminal => &mut self.terminals,
        }
    }

    pub fn register_arrival(
        &mut self,
        aircraft_id: Option<&str>,
        flight_number: Option<&str>,
        origin: Option<&str>,
    ) -> Result<&ArrivalRecord, ApronError> {
        let record = arrival::register_fields(aircraft_id, flight_number, origin)?;
        info!(
            aircraft = %record.aircraft_id,
            flight = %record.flight_number,
            origin = %record.origin,
            arrived = %record.arrival_time,
            "arrival registered"
        );
        Ok(self.arrivals.push(record))
    }

    /// Puts the longest-waiting arrival on the first free facility of `kind`.
    /// The arrival only leaves the waiting state when the registry accepts it.
    pub fn assign_next(&mut self, kind: FacilityKind) -> Result<Assignment, Denied> {
        if self.arrivals.is_empty() {
            return Err(Denied::NoArrivals);
        }
        let registry = match kind {
            FacilityKind::Runway => &mut self.runways,
            FacilityKind::Terminal => &mut self.terminals,
        };
        let record = self.arrivals.next_waiting().ok_or(Denied::NoneWaiting)?;

        match registry.assign(&record.aircraft_id) {
            Ok(facility) => {
                record.status = AssignmentStatus::assigned_to(kind);
                Ok(Assignment {
                    aircraft: record.aircraft_id.clone(),
                    facility,
                    kind,
                })
            }
            Err(denied) => {
                warn!(%kind, aircraft = %record.aircraft_id, %denied, "assignment denied");
                Err(denied)
            }
        }
    }

    pub fn facility(&self, kind: FacilityKind, name: &str) -> Result<&Facility, Denied> {
        self.registry(kind)
            .get(name)
            .ok_or_else(|| Denied::UnknownFacility(name.into()))
    }

    /// Frees a facility; releasing a free one succeeds.
    pub fn release(&mut self, kind: FacilityKind, name: &str) -> Result<(), Denied> {
        if self.registry_mut(kind).release(name) {
            Ok(())
        } else {
            Err(Denied::UnknownFacility(name.into()))
        }
    }

    pub fn available(&self, kind: FacilityKind) -> Vec<FacilityName> {
        self.registry(kind).available()
    }

    /// `Ok(None)` for a free facility, an error for one that does not exist.
    pub fn minutes_occupied(&self, kind: FacilityKind, name: &str) -> Result<Option<u64>, Denied> {
        self.facility(kind, name)?;
        Ok(self.registry(kind).minutes_occupied(name))
    }

    /// Runway or terminal currently held by `aircraft`, runways first.
    pub fn locate(&self, aircraft: &str) -> Option<(FacilityKind, FacilityName)> {
        [FacilityKind::Runway, FacilityKind::Terminal]
            .into_iter()
            .find_map(|kind| {
                self.registry(kind)
                    .occupied_by(aircraft)
                    .map(|f| (kind, f.name.clone()))
            })
    }
}
