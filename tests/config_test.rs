use std::io::Write;

use research_explorer::temporal::TimeWindow;
use research_explorer::{ExplorerConfig, ExplorerError};

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
api_base_url = "https://explorer.example.org/api/v1"
request_timeout_secs = 5
default_window = [1100, 1300]
"#
    )
    .unwrap();

    let config = ExplorerConfig::from_file(file.path()).unwrap();
    assert_eq!(config.api_base_url, "https://explorer.example.org/api/v1");
    assert_eq!(config.request_timeout_secs, 5);
    assert_eq!(config.default_window, TimeWindow::new(1100, 1300).unwrap());
    assert_eq!(config.cache_capacity, ExplorerConfig::default().cache_capacity);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ExplorerConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ExplorerError::Io(_)));
}

#[test]
fn test_out_of_domain_window_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_window = [-50, 1300]").unwrap();
    let err = ExplorerConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ExplorerError::Config(_)));
}
