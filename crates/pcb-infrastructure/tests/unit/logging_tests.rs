//! Logging setup

use pcb_domain::error::Error;
use pcb_infrastructure::logging::{LoggingConfig, init_logging, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level_accepts_known_levels() {
    let cases = [
        ("trace", Level::TRACE),
        ("DEBUG", Level::DEBUG),
        (" info ", Level::INFO),
        ("warning", Level::WARN),
        ("error", Level::ERROR),
    ];
    for (input, expected) in cases {
        assert_eq!(parse_log_level(input).unwrap(), expected, "{input}");
    }
}

#[test]
fn test_parse_log_level_rejects_unknown() {
    assert!(matches!(
        parse_log_level("verbose"),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_invalid_level_fails_before_installing() {
    let config = LoggingConfig {
        level: "verbose".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(&config).is_err());
}

#[test]
fn test_second_initialization_fails() {
    let config = LoggingConfig::default();
    let _ = init_logging(&config);

    let err = init_logging(&config).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(std::error::Error::source(&err).is_some());
}
