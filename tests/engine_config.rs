use budget_pace::{BarEngine, BarStatus, ConfigManager, EngineConfig, PaceError};
use tempfile::tempdir;

#[test]
fn missing_config_file_uses_defaults() {
    let dir = tempdir().expect("tempdir");
    let engine = BarEngine::from_config_file(dir.path().join("engine.json")).expect("engine");

    assert_eq!(engine, BarEngine::default());
}

#[test]
fn saved_config_drives_engine() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    let mut config = EngineConfig::default();
    config.front_load_factor = 2.0;
    manager.save(&config).expect("save config");

    let engine = BarEngine::from_config_file(manager.config_path()).expect("engine");
    let expected = engine.calculate_expected_spending(15, 30, 1500.0, None);

    assert!((expected - 1125.0).abs() < 1e-9);
    assert_eq!(
        engine.calculate(15, 30, 1125.0, 1500.0, None).status,
        BarStatus::OnTrack
    );
}

#[test]
fn invalid_config_file_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("engine.json");
    std::fs::write(&path, r#"{"front_load_factor": 0.5}"#).expect("write config");

    let err = BarEngine::from_config_file(&path).expect_err("invalid factor");
    assert!(matches!(err, PaceError::Config(_)));
}
