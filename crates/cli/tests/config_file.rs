use std::fs;
use tempfile::tempdir;
use timehash_cli::{commands, CliConfig, ConfigError, LogFormat, OutputFormat, Report};

#[test]
fn config_file_values_drive_encoding() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("timehash.toml");
    fs::write(
        &path,
        "precision = 7\noutput = \"json\"\nlog_level = \"info\"\nlog_format = \"pretty\"\n",
    )
    .expect("write config");

    let config = CliConfig::load_from_file(&path).expect("load config");
    assert_eq!(config.precision, 7);
    assert_eq!(config.output, OutputFormat::Json);
    assert_eq!(config.log_level, "info");
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert!(config.validate().is_ok());

    let report = commands::encode(Some(1_464_332_157.2), config.precision).expect("encode");
    let rendered = report.render(config.output).expect("render");
    let json: serde_json::Value = serde_json::from_str(&rendered).expect("json output");
    assert_eq!(json["kind"], "encoded");
    assert_eq!(json["hash"], "af1cef0");
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = tempdir().expect("tempdir");
    let err = CliConfig::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn malformed_config_file_is_a_parse_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "precision = \"ten\"").expect("write config");

    let err = CliConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn out_of_range_precision_in_file_fails_validation() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("deep.toml");
    fs::write(&path, "precision = 40").expect("write config");

    let config = CliConfig::load_from_file(&path).expect("parses");
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn navigation_commands_render_one_hash_per_line() {
    let report = commands::expand("add0c").expect("expand");
    assert_eq!(
        report.render(OutputFormat::Text).expect("render"),
        "add0b\nadd0c\nadd0d"
    );
    assert!(matches!(report, Report::Hashes { .. }));
}
