mod common;

use astro_core::chart::{
    BodyCatalog, BodyId, ChartBuilder, ChartError, ASCENDANT, DESCENDANT,
};
use astro_core::ephemeris::{EphemerisError, HouseSystem};
use astro_core::zodiac::ZodiacSign;
use common::FixedEphemeris;

const JD: f64 = 2451545.0;

#[test]
fn test_chart_always_has_angles() {
    let eph = FixedEphemeris::new(15.0);
    let build = ChartBuilder::default().build_chart(&eph, JD, 51.5, 0.0).unwrap();
    let snapshot = &build.snapshot;

    let asc = snapshot.get(ASCENDANT).unwrap();
    let desc = snapshot.get(DESCENDANT).unwrap();
    assert_eq!(asc.house, 1);
    assert_eq!(desc.house, 7);
    assert_eq!(asc.latitude, 0.0);
    assert_eq!(desc.latitude, 0.0);
    assert!(!asc.retrograde && !desc.retrograde);
    assert_eq!(desc.longitude, 195.0);
    assert_eq!(snapshot.ascendant, 15.0);
}

#[test]
fn test_ascendant_and_descendant_opposed() {
    for asc in [0.0, 15.0, 179.9, 180.0, 250.25, 359.5] {
        let eph = FixedEphemeris::new(asc);
        let snapshot = ChartBuilder::default().build_chart(&eph, JD, 0.0, 0.0).unwrap().snapshot;
        let a = snapshot.get(ASCENDANT).unwrap().longitude;
        let d = snapshot.get(DESCENDANT).unwrap().longitude;
        assert!((((d - a) + 360.0) % 360.0 - 180.0).abs() < 1e-9);
    }
}

#[test]
fn test_uses_default_house_system() {
    let eph = FixedEphemeris::new(15.0);
    ChartBuilder::default().build_chart(&eph, JD, 10.0, 10.0).unwrap();
    assert_eq!(*eph.queried_systems.borrow(), vec![HouseSystem::Placidus]);
}

#[test]
fn test_body_behind_ascendant_goes_to_twelfth_house() {
    // Ascendant 15° Aries, Sun 10° Aries
    let eph = FixedEphemeris::new(15.0).with_body(0, 10.0, 0.0, 0.98);
    let snapshot = ChartBuilder::default().build_chart(&eph, JD, 0.0, 0.0).unwrap().snapshot;
    let sun = snapshot.get("Sun").unwrap();
    assert_eq!(sun.sign, ZodiacSign::Aries);
    assert_eq!(sun.house, 12);
}

#[test]
fn test_whole_sign_houses_and_signs() {
    let eph = FixedEphemeris::new(15.0)
        .with_body(0, 15.0, 0.0, 1.0) // exactly on the ascendant
        .with_body(1, 45.0, 5.0, 13.0) // one sign ahead
        .with_body(4, 350.0, 1.2, 0.5); // Pisces
    let snapshot = ChartBuilder::default().build_chart(&eph, JD, 0.0, 0.0).unwrap().snapshot;

    let sun = snapshot.get("Sun").unwrap();
    assert_eq!(sun.house, 1);
    assert_eq!(sun.degree_in_sign, 15.0);

    let moon = snapshot.get("Moon").unwrap();
    assert_eq!(moon.house, 2);
    assert_eq!(moon.sign, ZodiacSign::Taurus);
    assert_eq!(moon.latitude, 5.0);

    let mars = snapshot.get("Mars").unwrap();
    assert_eq!(mars.house, 12);
    assert_eq!(mars.sign, ZodiacSign::Pisces);
}

#[test]
fn test_longitudes_are_normalized() {
    let eph = FixedEphemeris::new(-30.0)
        .with_body(0, 370.0, 0.0, 1.0)
        .with_body(1, -5.0, 0.0, 1.0);
    let snapshot = ChartBuilder::default().build_chart(&eph, JD, 0.0, 0.0).unwrap().snapshot;

    assert_eq!(snapshot.ascendant, 330.0);
    let sun = snapshot.get("Sun").unwrap();
    assert!((sun.longitude - 10.0).abs() < 1e-9);
    assert_eq!(sun.sign, ZodiacSign::Aries);
    let moon = snapshot.get("Moon").unwrap();
    assert!((moon.longitude - 355.0).abs() < 1e-9);
    for record in snapshot.iter() {
        assert!((0.0..360.0).contains(&record.longitude));
        assert!((1..=12).contains(&record.house));
    }
}

#[test]
fn test_retrograde_follows_speed() {
    let eph = FixedEphemeris::new(0.0)
        .with_body(2, 100.0, 0.0, -0.3)
        .with_body(3, 120.0, 0.0, 0.0);
    let snapshot = ChartBuilder::default().build_chart(&eph, JD, 0.0, 0.0).unwrap().snapshot;
    assert!(snapshot.get("Mercury").unwrap().retrograde);
    assert!(!snapshot.get("Venus").unwrap().retrograde);
}

#[test]
fn test_south_node_opposes_north_node() {
    let eph = FixedEphemeris::new(0.0).with_body(10, 300.5, 0.0, -0.05);
    let snapshot = ChartBuilder::default().build_chart(&eph, JD, 0.0, 0.0).unwrap().snapshot;

    let north = snapshot.get("North Node").unwrap();
    let south = snapshot.get("South Node").unwrap();
    assert!((south.longitude - (north.longitude + 180.0) % 360.0).abs() < 1e-9);
    assert_eq!(south.latitude, north.latitude);
    assert_eq!(south.speed, north.speed);
    assert!(south.retrograde);
}

#[test]
fn test_failed_body_is_skipped_not_fatal() {
    let eph = FixedEphemeris::full(15.0).failing_on(15);
    let build = ChartBuilder::default().build_chart(&eph, JD, 0.0, 0.0).unwrap();

    assert!(build.snapshot.get("Chiron").is_none());
    assert!(build.snapshot.get("Sun").is_some());
    assert_eq!(build.skipped.len(), 1);
    assert_eq!(build.skipped[0].body, "Chiron");
    assert!(matches!(
        build.skipped[0].error,
        EphemerisError::CalculationFailed { code: 15, .. }
    ));
    assert!(!build.is_complete());
    // 14 catalog bodies - Chiron + 2 angles
    assert_eq!(build.snapshot.len(), 15);
}

#[test]
fn test_failed_north_node_drops_both_nodes() {
    let eph = FixedEphemeris::full(15.0).failing_on(10);
    let build = ChartBuilder::default().build_chart(&eph, JD, 0.0, 0.0).unwrap();
    let skipped: Vec<&str> = build.skipped.iter().map(|s| s.body.as_str()).collect();
    assert_eq!(skipped, vec!["North Node", "South Node"]);
}

#[test]
fn test_complete_chart_contains_whole_catalog() {
    let eph = FixedEphemeris::full(100.0);
    let build = ChartBuilder::default().build_chart(&eph, JD, 0.0, 0.0).unwrap();
    assert!(build.is_complete());
    for entry in BodyCatalog::standard().entries() {
        assert!(build.snapshot.get(&entry.name).is_some(), "missing {}", entry.name);
    }
}

#[test]
fn test_house_failure_is_fatal() {
    let eph = FixedEphemeris {
        ascendant: None,
        ..FixedEphemeris::full(0.0)
    };
    let result = ChartBuilder::default().build_chart(&eph, JD, 89.9, 0.0);
    assert!(matches!(result, Err(ChartError::HouseCusps(_))));
}

#[test]
fn test_non_finite_input_rejected() {
    let eph = FixedEphemeris::full(0.0);
    let result = ChartBuilder::default().build_chart(&eph, JD, f64::NAN, 0.0);
    assert!(matches!(
        result,
        Err(ChartError::InvalidInput { field: "latitude", .. })
    ));
}

#[test]
fn test_custom_catalog() {
    let builder = ChartBuilder::from(BodyCatalog::from_ids(&[BodyId::Moon]));
    let eph = FixedEphemeris::full(0.0);
    let snapshot = builder.build_chart(&eph, JD, 0.0, 0.0).unwrap().snapshot;
    assert_eq!(snapshot.len(), 3);
    assert!(snapshot.get("Sun").is_none());
}
