//! End-to-end behaviour of a small metric system

use std::sync::Arc;
use std::thread;
use unitsafe_units::{measure, RegistryConfig, System, UnitError, UnitsBuilder};

measure! {
    pub struct Meter;
    pub struct Kilometer;
    pub struct Gigameter;
    pub struct Seconds;
    pub struct MetersPerSecond;
    pub struct SecondsPerMeter;
    pub struct MetersSquaredPerSecond;
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn system() -> System {
    init_tracing();
    let mut units = System::builder("test");
    units.add_basic("m").unwrap();
    units.add_basic("s").unwrap();
    units.add_conversion("m", "km", 1000.0).unwrap();
    units.add_conversion("km", "gm", 1000.0).unwrap();

    let mut types = units.types();
    types.add_type::<Meter>(&["m"], &[]).unwrap();
    types.add_type::<Kilometer>(&["km"], &[]).unwrap();
    types.add_type::<Gigameter>(&["gm"], &[]).unwrap();
    types.add_type::<Seconds>(&["s"], &[]).unwrap();
    types.add_type::<MetersPerSecond>(&["m"], &["s"]).unwrap();
    types.add_type::<SecondsPerMeter>(&["s"], &["m"]).unwrap();
    types.add_type::<MetersSquaredPerSecond>(&["m", "m"], &["s"]).unwrap();
    types.build()
}

#[test]
fn test_convert() {
    let s = system();

    let m = Meter(5000.0);
    let km: Kilometer = s.convert(&m).unwrap();
    assert_eq!(km, Kilometer(5.0), "5000m = {}km, want 5", km);

    let gm: Gigameter = s.convert(&m).unwrap();
    assert_eq!(gm, Gigameter(5.0 / 1000.0), "5000m = {}gm, want 5/1000", gm);

    let m: Meter = s.convert(&km).unwrap();
    assert_eq!(m, Meter(5000.0), "5km = {}m, want 5000", m);
}

#[test]
fn test_combine() {
    let s = system();

    let mss: MetersSquaredPerSecond = s.combine(&[&Meter(10.0), &MetersPerSecond(25.0)]).unwrap();
    assert_eq!(mss, MetersSquaredPerSecond(250.0));

    let mss: MetersSquaredPerSecond = s.combine(&[&Kilometer(10.0), &MetersPerSecond(25.0)]).unwrap();
    assert_eq!(mss, MetersSquaredPerSecond(250000.0));

    let mss: MetersSquaredPerSecond = s.combine(&[&Meter(10.0), &SecondsPerMeter(25.0)]).unwrap();
    assert_eq!(mss, MetersSquaredPerSecond(10.0 / 25.0));
}

#[test]
fn test_simplifiable_unit() {
    let mut units = System::builder("test");
    units.add_basic("m").unwrap();
    let mut types = units.types();
    let err = types.add_type::<Meter>(&["m"], &["m"]).unwrap_err();
    assert!(matches!(err, UnitError::SimplifiableUnit { .. }), "got {}", err);
}

#[test]
fn test_duplicate_basic_unit() {
    let mut units = System::builder("test");
    units.add_basic("m").unwrap();
    units.add_basic("s").unwrap();
    units.add_conversion("m", "km", 1000.0).unwrap();
    for _ in 0..3 {
        assert!(matches!(units.add_basic("m"), Err(UnitError::DuplicateUnit { .. })));
    }
}

#[test]
fn test_user_facing_errors() {
    let s = system();
    let err = s.combine::<MetersPerSecond>(&[&Meter(1.0), &Meter(1.0)]).unwrap_err();
    assert!(err.is_user_facing());
    assert_eq!(err.to_string(), "test: impossible conversion: no multiply/divide combination of the arguments yields MetersPerSecond");

    let err = s.combine::<Meter>(&[&Meter(1.0), &Kilometer(1.0), &Meter(1.0)]).unwrap_err();
    assert!(matches!(err, UnitError::AmbiguousConversion { .. }));
}

#[test]
fn test_concurrent_reads() {
    let s = Arc::new(system());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let s = Arc::clone(&s);
            thread::spawn(move || {
                let m = Meter(1000.0 * i as f64);
                let km: Kilometer = s.convert(&m).unwrap();
                let mss: MetersSquaredPerSecond = s.combine(&[&km, &MetersPerSecond(2.0)]).unwrap();
                (km, mss)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (km, mss) = handle.join().unwrap();
        assert_eq!(km, Kilometer(i as f64));
        assert_eq!(mss, MetersSquaredPerSecond(2000.0 * i as f64));
    }
}

#[test]
fn test_system_from_config() {
    let config = RegistryConfig::from_json(
        r#"{
            "name": "config",
            "basic": ["m", "s"],
            "conversions": [
                { "from": "m", "to": "km", "factor": 1000 },
                { "from": "km", "to": "gm", "factor": 1000 }
            ]
        }"#,
    )
    .unwrap();

    let mut types = UnitsBuilder::from_config(&config).unwrap().types();
    types.add_type::<Meter>(&["m"], &[]).unwrap();
    types.add_type::<Gigameter>(&["gm"], &[]).unwrap();
    let s = types.build();

    let m: Meter = s.convert(&Gigameter(0.002)).unwrap();
    assert_eq!(m, Meter(2000.0));
}
