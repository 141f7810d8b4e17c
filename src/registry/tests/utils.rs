use crate::aircraft::AircraftId;
use crate::facility::FacilityKind;
use crate::registry::Registry;
use crate::time::Timestamp;
use chrono::TimeDelta;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

pub fn at(s: &str) -> Timestamp {
    s.parse().unwrap()
}

pub fn minutes_after(start: Timestamp, minutes: i64) -> Timestamp {
    start + TimeDelta::minutes(minutes)
}

pub fn runways(names: &[&str]) -> Registry {
    Registry::new(FacilityKind::Runway, names.iter().copied()).unwrap()
}

pub fn terminals(names: &[&str]) -> Registry {
    Registry::new(FacilityKind::Terminal, names.iter().copied()).unwrap()
}

/// Occupies exactly the facilities named in `occupied`, each by an aircraft
/// named after it.
pub fn with_occupied(registry: &mut Registry, occupied: &[&str], since: Timestamp) {
    // assign fills the first free slot, so free the ones we skipped afterwards
    let mut skipped = vec![];
    let names: Vec<_> = registry.facilities().map(|f| f.name.clone()).collect();
    for name in names {
        let ac = id(&format!("AC_{name}"));
        registry.assign_at(&ac, since).unwrap();
        if !occupied.contains(&&*name) {
            skipped.push(name);
        }
    }
    for name in skipped {
        assert!(registry.release(&name));
    }
}

pub fn arb_aircraft() -> impl Strategy<Value = AircraftId> {
    prop_oneof![
        Just(id("AC_1")),
        Just(id("AC_2")),
        Just(id("AC_3")),
    ]
}
