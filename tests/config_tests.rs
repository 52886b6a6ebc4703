//! Integration tests for hardrules.toml loading
//!
//! Files are written to temporary directories and loaded through the public
//! `Config` API, then turned into engines.

#[macro_use]
mod common;

use common::reasons;
use hardrules::config::{Config, RuleValue};
use hardrules::{Adapters, ConfigError, Engine};
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hardrules.toml");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

#[test]
fn test_load_full_config() {
    let (_dir, path) = write_config(
        r#"
[hardrules]
source_lang = "en"
target_lang = "es"
run_all_rules = true
lm_threshold = 0.5

[rules]
not_too_long = 512
no_urls = true
no_literals = ["Re:", "{{"]
lm_filter = false
"#,
    );

    let config = assert_ok!(Config::load(&path));
    assert_eq!(config.hardrules.target_lang.as_deref(), Some("es"));
    assert_eq!(config.rules.len(), 4);
    assert_eq!(config.rules.get("lm_filter"), Some(&RuleValue::Bool(false)));

    let settings = assert_ok!(config.engine_settings());
    let engine = assert_ok!(Engine::new(settings, Adapters::none()));
    assert!(engine.is_exhaustive());
    assert!(assert_some!(engine.pipeline().get("no_urls")).enabled);
    assert!(!assert_some!(engine.pipeline().get("lm_filter")).enabled);
}

#[test]
fn test_configured_literals_replace_defaults() {
    let (_dir, path) = write_config(
        "[hardrules]\nsource_lang = \"en\"\ntarget_lang = \"es\"\n\n[rules]\nno_literals = [\"lorem\"]\n",
    );
    let config = assert_ok!(Config::load(&path));
    let engine = assert_ok!(Engine::new(assert_ok!(config.engine_settings()), Adapters::none()));

    let verdict = engine.evaluate("Lorem ipsum lorem dolor sit", "Texto de relleno sin sentido");
    assert_eq!(reasons(&verdict), vec!["no_literals(left)"]);

    // "Re:" is no longer a default literal once the list is overridden
    assert!(engine.evaluate("Re: your order has shipped", "Su pedido ha sido enviado").is_keep());
}

#[test]
fn test_empty_literal_list_disables_rule() {
    let config = assert_ok!(Config::parse("[rules]\nno_literals = []\n"));
    assert_eq!(config.rules.get("no_literals"), Some(&RuleValue::List(vec![])));
}

#[test]
fn test_unknown_rule_rejected_at_load() {
    let (_dir, path) = write_config("[rules]\nno_emoji = true\n");
    assert!(matches!(Config::load(&path), Err(ConfigError::UnknownRule(name)) if name == "no_emoji"));
}

#[test]
fn test_invalid_values_rejected_at_load() {
    for body in [
        "not_too_long = -5",
        "length_ratio = 0.5",
        "length_ratio = true\nno_paren = 3",
        "no_literals = 4",
    ] {
        let toml = format!("[rules]\n{}\n", body);
        let result = Config::parse(&toml);
        assert!(
            matches!(result, Err(ConfigError::InvalidValue { .. })),
            "{} should be rejected, got {:?}",
            body,
            result
        );
    }
}

#[test]
fn test_invalid_value_names_field() {
    let err = Config::parse("[rules]\nnot_too_short = -1\n").unwrap_err();
    match err {
        ConfigError::InvalidValue { field, .. } => assert_eq!(field, "rules.not_too_short"),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let (_dir, path) = write_config("[hardrules\nsource_lang = \"en\"\n");
    assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
}
