#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use stockpile_core::QuantityPolicy;
use stockpile_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
gateway:
  listen: "0.0.0.0:8000"
inventory:
  quantity_polcy: accumulate # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8000");
    assert_eq!(cfg.inventory.quantity_policy, QuantityPolicy::Replace);
    assert!(cfg.metrics.enabled);
    assert_eq!(cfg.metrics.path, "/metrics");
}

#[test]
fn accumulate_policy_parses() {
    let ok = r#"
version: 1
gateway:
  listen: "127.0.0.1:9000"
inventory:
  quantity_policy: accumulate
metrics:
  enabled: false
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.inventory.quantity_policy, QuantityPolicy::Accumulate);
    assert_eq!(cfg.gateway.listen_addr().unwrap().port(), 9000);
    assert!(!cfg.metrics.enabled);
}

#[test]
fn unknown_policy_is_rejected() {
    let bad = "version: 1\ninventory:\n  quantity_policy: multiply\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn wrong_version_is_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn invalid_listen_is_rejected() {
    let bad = "version: 1\ngateway:\n  listen: \"localhost\"\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn metrics_path_must_be_a_separate_route() {
    for path in ["metrics", "/", "/items/metrics"] {
        let bad = format!("version: 1\nmetrics:\n  path: \"{path}\"\n");
        let err = config::load_from_str(&bad).expect_err("must fail");
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST", "path {path}");
    }
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let path = "definitely/not/here/stockpile.yaml";

    let err = config::load_from_file(path).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");

    let cfg = config::load_or_default(path).expect("defaults");
    assert_eq!(cfg.version, 1);
    cfg.validate().unwrap();
}
