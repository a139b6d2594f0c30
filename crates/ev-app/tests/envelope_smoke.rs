//! Smoke tests for the ev-app service layer.

use std::path::PathBuf;

use ev_app::{
    AppError, EnvelopeOptions, load_envelope, materialize_envelope, validate_envelope,
    write_report,
};

fn demo_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // go to crates
    path.pop(); // go to repo root
    path.push("demos");
    path.push("house.yaml");
    path
}

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ev_app_smoke_{}", std::process::id()));
    let _ = std::fs::create_dir_all(&dir);
    dir.join(name)
}

#[test]
fn demo_house_end_to_end() {
    let path = demo_path();
    if !path.exists() {
        eprintln!("Skipping test: demo envelope not found at {:?}", path);
        return;
    }

    let envelope = load_envelope(&path).expect("Failed to load envelope");
    validate_envelope(&envelope).expect("Validation should succeed");

    let report = materialize_envelope(&envelope, &EnvelopeOptions::default()).unwrap();
    assert_eq!(report.constructions.len(), envelope.surfaces.len());
    assert_eq!(report.degraded_surfaces(), vec!["WallLegacy"]);

    for c in report.constructions.iter().filter(|c| c.matched) {
        assert!(
            (c.achieved_r() - c.requested_r).abs() < 0.1,
            "{}: {} vs {}",
            c.surface_id,
            c.achieved_r(),
            c.requested_r
        );
    }

    // Basement: two exterior walls (40 ft + 30 ft) cover only 70 of 120 ft
    let basement = &report.foundations[0];
    assert_eq!(basement.instances.len(), 3);
    let rows = basement.summaries();
    let bare = rows.iter().find(|r| r.wall.is_none()).unwrap();
    assert!((bare.exposed_perimeter_ft - 50.0).abs() < 1e-9);
    assert!(rows.iter().all(|r| r.wall.as_deref() != Some("BasementWallInterior")));

    let report_path = scratch("house.json");
    write_report(&report_path, &report).unwrap();
    let written = std::fs::read_to_string(&report_path).unwrap();
    assert!(written.contains("WallLegacy"));
}

#[test]
fn json_envelope_loads() {
    let path = scratch("tiny.json");
    std::fs::write(
        &path,
        r#"{
  "version": 1,
  "name": "tiny",
  "surfaces": [
    {"id": "W", "kind": {"type": "wall", "wall_type": "straw_bale"}, "assembly_r": 30.0}
  ]
}"#,
    )
    .unwrap();

    let envelope = load_envelope(&path).unwrap();
    let report = materialize_envelope(&envelope, &EnvelopeOptions::default()).unwrap();
    assert!(report.constructions[0].matched);
    assert!(report.foundations.is_empty());
}

#[test]
fn missing_file_names_path() {
    let err = load_envelope(&scratch("does_not_exist.yaml")).unwrap_err();
    assert!(matches!(err, AppError::EnvelopeFileRead { .. }));
}
