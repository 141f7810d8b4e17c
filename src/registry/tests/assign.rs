use crate::error::Denied;
use crate::facility::{FacilityKind, FacilityStatus, Occupancy};
use crate::registry::Registry;
use crate::registry::tests::utils::{at, id, runways, terminals, with_occupied};

#[test]
fn test_assign_first_available() {
    let mut registry = runways(&["Runway_01", "Runway_02", "Runway_03"]);
    let now = at("2025-06-14 09:00:00");

    let name = registry.assign_at(&id("ABC123"), now).unwrap();

    assert_eq!(id("Runway_01"), name);
    let facility = registry.get("Runway_01").unwrap();
    assert_eq!(FacilityStatus::Occupied, facility.status());
    assert_eq!(
        Occupancy::Occupied { aircraft: id("ABC123"), since: now },
        facility.occupancy
    );
    assert_eq!(vec![id("Runway_02"), id("Runway_03")], registry.available());
}

#[test]
fn test_assign_skips_occupied_prefix() {
    let mut registry = runways(&["Runway_01", "Runway_02", "Runway_03"]);
    let now = at("2025-06-14 09:00:00");
    with_occupied(&mut registry, &["Runway_01"], now);

    assert_eq!(Ok(id("Runway_02")), registry.assign_at(&id("XYZ789"), now));
}

#[test]
fn test_assign_fills_hole_before_tail() {
    let mut registry = terminals(&["Terminal_A", "Terminal_B", "Terminal_C"]);
    let now = at("2025-06-14 09:00:00");
    with_occupied(&mut registry, &["Terminal_A", "Terminal_C"], now);

    assert_eq!(Ok(id("Terminal_B")), registry.assign_at(&id("XYZ789"), now));
    assert!(registry.available().is_empty());
}

#[test]
fn test_assign_follows_declaration_order() {
    let mut registry = runways(&["Runway_09", "Runway_01"]);

    assert_eq!(Ok(id("Runway_09")), registry.assign(&id("ABC123")));
}

#[test]
fn test_assign_none_available() {
    let mut registry = runways(&["Runway_01"]);
    let now = at("2025-06-14 09:00:00");
    registry.assign_at(&id("ABC123"), now).unwrap();

    let denied = registry.assign_at(&id("ABC123"), now).unwrap_err();

    assert_eq!(Denied::NoneAvailable(FacilityKind::Runway), denied);
    assert_eq!("no runways available", denied.to_string());
    assert_eq!(Some(&id("ABC123")), registry.get("Runway_01").unwrap().occupant());
}

#[test]
fn test_assign_message_names_category() {
    let mut registry = terminals(&["Terminal_A"]);
    registry.assign(&id("ABC123")).unwrap();

    let denied = registry.assign(&id("XYZ789")).unwrap_err();

    assert_eq!("no terminals available", denied.to_string());
}

#[test]
fn test_assign_empty_registry() {
    let mut registry = Registry::new(FacilityKind::Runway, Vec::<String>::new()).unwrap();

    assert_eq!(Err(Denied::EmptyRegistry), registry.assign(&id("ABC123")));
    assert!(registry.is_empty());
}

#[test]
fn test_assign_missing_aircraft() {
    let mut registry = runways(&["Runway_01", "Runway_02"]);

    assert_eq!(Err(Denied::MissingAircraft), registry.assign(&id("")));
    assert_eq!(Err(Denied::MissingAircraft), registry.assign(&id("  ")));
    assert_eq!(2, registry.available().len());
}

#[test]
fn test_occupied_by() {
    let mut registry = terminals(&["Terminal_A", "Terminal_B"]);
    registry.assign(&id("ABC123")).unwrap();
    registry.assign(&id("XYZ789")).unwrap();

    assert_eq!(
        Some(id("Terminal_B")),
        registry.occupied_by("XYZ789").map(|f| f.name.clone())
    );
    assert!(registry.occupied_by("DL200").is_none());
}

#[test]
fn test_new_rejects_duplicates_and_blanks() {
    assert!(matches!(
        Registry::new(FacilityKind::Runway, ["Runway_01", "Runway_01"]),
        Err(crate::error::ApronError::DuplicateFacility(name)) if &*name == "Runway_01"
    ));
    assert!(matches!(
        Registry::new(FacilityKind::Runway, ["Runway_01", " "]),
        Err(crate::error::ApronError::InvalidInput { .. })
    ));
}
