use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn explicit_values_are_parsed() {
    let config = HostConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("LOG_FORMAT", "JSON"),
    ]))
    .unwrap();
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn port_whitespace_trimmed() {
    let config = HostConfig::from_lookup(lookup_from(&[("PORT", " 4000 ")])).unwrap();
    assert_eq!(config.port, 4000);
}

#[test]
fn ipv6_bind_addr_accepted() {
    let config = HostConfig::from_lookup(lookup_from(&[("BIND_ADDR", "::1")])).unwrap();
    assert_eq!(config.socket_addr().to_string(), "[::1]:3000");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn invalid_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::Port("70000".to_owned()));
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = HostConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::BindAddr("localhost".to_owned()));
}

#[test]
fn unknown_log_format_is_rejected() {
    let err = HostConfig::from_lookup(lookup_from(&[("LOG_FORMAT", "xml")])).unwrap_err();
    assert!(err.to_string().contains("xml"));
}
