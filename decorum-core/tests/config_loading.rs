use decorum_core::prelude::*;
use decorum_core::ConfigError;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn loads_engine_from_config_file() {
    let file = write_config(
        r#"
        max_page_size = 25

        [capabilities]
        application = ["name"]
        log_entry = ["timestamp", "level"]
        "#,
    );

    let config = DecorationConfig::load(file.path()).unwrap();
    assert_eq!(config.max_page_size, 25);

    let engine = DecorationEngine::from_config(config).unwrap();
    let registry = engine.registry();
    assert!(registry.is_orderable(RecordKind::Application, "name"));
    assert!(!registry.is_orderable(RecordKind::Application, "created_at"));
    assert!(registry.is_orderable(RecordKind::LogEntry, "level"));
    assert!(!registry.supports(RecordKind::Setting));

    // Settings have no entry in this file, so the dispatcher refuses them.
    let dispatcher = DecorationDispatcher::new(engine);
    let err = dispatcher
        .decorate(Collection::Settings(Vec::new()), &Pagination::new(0, 10))
        .unwrap_err();
    assert_eq!(
        err,
        DecorationError::UnsupportedKind {
            kind: RecordKind::Setting,
        }
    );
}

#[test]
fn page_limit_comes_from_config() {
    let file = write_config("max_page_size = 5");
    let engine = DecorationEngine::from_config(DecorationConfig::load(file.path()).unwrap()).unwrap();
    let dispatcher = DecorationDispatcher::new(engine);

    let err = dispatcher
        .decorate(Collection::LogEntries(Vec::new()), &Pagination::new(0, 6))
        .unwrap_err();
    assert!(matches!(err, DecorationError::InvalidPagination { .. }));

    assert!(dispatcher
        .decorate(Collection::LogEntries(Vec::new()), &Pagination::new(0, 5))
        .is_ok());
}

#[test]
fn missing_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = DecorationConfig::load(&path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unknown_kinds_in_file_fail_engine_construction() {
    let file = write_config(
        r#"
        [capabilities]
        deployments = ["name"]
        "#,
    );
    let config = DecorationConfig::load(file.path()).unwrap();

    let err = DecorationEngine::from_config(config).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownKind { .. }));
}
