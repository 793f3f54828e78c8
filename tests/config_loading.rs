//! Loading navigator configuration files from disk.

use gridwalk::{GridwalkError, GridwalkResult, Navigator, NavigatorConfig, SearchRegion, Vec3};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(json.as_bytes()).expect("Failed to write temp file");
    file
}

#[test]
fn test_load_partial_config_fills_defaults() -> GridwalkResult<()> {
    let file = write_config(r#"{ "step_distance": 0.25, "search": { "max_expansions": 500 } }"#);
    let config = NavigatorConfig::load(file.path())?;

    assert_eq!(config.step_distance, 0.25);
    assert_eq!(config.search.max_expansions, 500);
    assert!(config.corner_smoothing);
    assert_eq!(config.search.region, SearchRegion::default());
    Ok(())
}

#[test]
fn test_saved_config_loads_back() -> GridwalkResult<()> {
    let mut config = NavigatorConfig::for_testing().with_step_distance(0.3);
    config.corner_smoothing = false;
    config.search.region = SearchRegion::Unbounded;

    let file = write_config(&config.to_json_string()?);
    assert_eq!(NavigatorConfig::load(file.path())?, config);
    Ok(())
}

#[test]
fn test_loaded_config_drives_navigator() -> GridwalkResult<()> {
    let file = write_config(r#"{ "step_distance": 0.5 }"#);
    let mut navigator = Navigator::new(NavigatorConfig::load(file.path())?, Vec3::ZERO)?;
    navigator.retarget(Vec3::new(3.0, 0.0, 0.0));

    assert_eq!(navigator.follower().step_distance(), 0.5);
    navigator.update();
    let report = navigator.update();
    // One step along the path plus one blended step toward the next waypoint
    assert!((report.displacement - 1.0).abs() < 1e-5);
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let result = NavigatorConfig::load(dir.path().join("missing.json"));
    assert!(matches!(result, Err(GridwalkError::Io(_))));
}

#[test]
fn test_malformed_file_is_serde_error() {
    let file = write_config(r#"{ "step_distance": "fast" }"#);
    assert!(matches!(
        NavigatorConfig::load(file.path()),
        Err(GridwalkError::Serde(_))
    ));
}

#[test]
fn test_out_of_range_values_are_rejected() {
    for json in [
        r#"{ "step_distance": -1.0 }"#,
        r#"{ "chunk_size": 0 }"#,
        r#"{ "search": { "region": { "kind": "around_endpoints", "margin": -2 } } }"#,
    ] {
        let file = write_config(json);
        assert!(
            matches!(NavigatorConfig::load(file.path()), Err(GridwalkError::InvalidConfig(_))),
            "accepted {}",
            json
        );
    }
}
