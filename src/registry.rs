use crate::aircraft::AircraftId;
use crate::error::{ApronError, Denied};
use crate::facility::{Facility, FacilityKind, FacilityName, Occupancy};
use crate::time::Timestamp;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// All facilities of one kind, in the fixed order they were declared.
/// Only occupancy ever changes after construction.
pub struct Registry {
    kind: FacilityKind,
    facilities: Vec<Facility>,
    facilities_index: HashMap<FacilityName, usize>,
}

impl Registry {
    pub fn new<I, S>(kind: FacilityKind, names: I) -> Result<Registry, ApronError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut facilities = Vec::new();
        let mut facilities_index = HashMap::new();
        for raw in names {
            let name = raw.as_ref().trim();
            if name.is_empty() {
                return Err(ApronError::InvalidInput { field: "facility name" });
            }
            let name: FacilityName = Arc::from(name);
            if facilities_index.insert(name.clone(), facilities.len()).is_some() {
                return Err(ApronError::DuplicateFacility(name));
            }
            facilities.push(Facility::new(name));
        }
        Ok(Registry {
            kind,
            facilities,
            facilities_index,
        })
    }

    pub fn kind(&self) -> FacilityKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    pub fn facilities(&self) -> impl Iterator<Item = &Facility> {
        self.facilities.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Facility> {
        self.facilities_index.get(name).map(|idx| &self.facilities[*idx])
    }

    /// Facility currently held by `aircraft`, if any.
    pub fn occupied_by(&self, aircraft: &str) -> Option<&Facility> {
        self.facilities
            .iter()
            .find(|f| f.occupant().is_some_and(|id| **id == *aircraft))
    }

    pub fn assign(&mut self, aircraft: &AircraftId) -> Result<FacilityName, Denied> {
        self.assign_at(aircraft, Timestamp::now())
    }

    /// First-fit: the earliest declared facility that is available wins.
    /// Nothing is touched when the assignment is denied.
    pub fn assign_at(&mut self, aircraft: &AircraftId, now: Timestamp) -> Result<FacilityName, Denied> {
        if self.is_empty() {
            return Err(Denied::EmptyRegistry);
        }
        if aircraft.trim().is_empty() {
            return Err(Denied::MissingAircraft);
        }

        let facility = self
            .facilities
            .iter_mut()
            .find(|f| f.is_available())
            .ok_or(Denied::NoneAvailable(self.kind))
            .inspect_err(|_| debug!(kind = %self.kind, %aircraft, "no facility available"))?;

        facility.occupancy = Occupancy::Occupied {
            aircraft: aircraft.clone(),
            since: now,
        };
        let name = facility.name.clone();
        info!(kind = %self.kind, facility = %name, %aircraft, since = %now, "facility assigned");

        self.assert_invariants();
        Ok(name)
    }

    pub fn minutes_occupied(&self, name: &str) -> Option<u64> {
        self.minutes_occupied_at(name, Timestamp::now())
    }

    /// `None` means "not applicable": unknown name or a free facility.
    /// `Some(0)` is an occupied facility taken less than a minute ago.
    pub fn minutes_occupied_at(&self, name: &str, now: Timestamp) -> Option<u64> {
        self.get(name)
            .and_then(|f| f.occupied_since())
            .map(|since| since.minutes_until(now))
    }

    pub fn available(&self) -> Vec<FacilityName> {
        self.facilities
            .iter()
            .filter(|f| f.is_available())
            .map(|f| f.name.clone())
            .collect()
    }

    /// Frees a facility. Releasing a free facility is a successful no-op;
    /// only an unknown name fails.
    pub fn release(&mut self, name: &str) -> bool {
        let Some(idx) = self.facilities_index.get(name) else {
            debug!(kind = %self.kind, facility = name, "release of unknown facility");
            return false;
        };
        let facility = &mut self.facilities[*idx];
        if let Some(aircraft) = facility.occupant() {
            info!(kind = %self.kind, facility = name, %aircraft, "facility released");
        }
        facility.occupancy = Occupancy::Available;

        self.assert_invariants();
        true
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        debug_assert_eq!(
            self.facilities.len(),
            self.facilities_index.len(),
            "Facility index out of sync"
        );
        debug_assert!(
            self.facilities
                .iter()
                .enumerate()
                .all(|(i, f)| self.facilities_index.get(&f.name) == Some(&i)),
            "Facility index points at the wrong slot"
        );
        debug_assert!(
            self.facilities.iter().all(|f| match &f.occupancy {
                Occupancy::Occupied { aircraft, .. } => !aircraft.trim().is_empty(),
                Occupancy::Available => true,
            }),
            "Occupied facility without an aircraft"
        );
    }

    #[cfg(not(debug_assertions))]
    fn assert_invariants(&self) {}
}
