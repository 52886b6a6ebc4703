//! Test utilities for hardrules integration tests

#![allow(dead_code)]

use hardrules::{Adapters, Engine, EngineSettings, Verdict};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Extract Some value or panic with context
#[macro_export]
macro_rules! assert_some {
    ($expr:expr) => {
        match $expr {
            Some(v) => v,
            None => panic!("assertion failed: expected Some, got None"),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Some(v) => v,
            None => panic!("{}: got None", $msg),
        }
    };
}

/// English-Spanish engine without scorer adapters
pub fn en_es_engine(run_all_rules: bool) -> Engine {
    let settings = EngineSettings {
        run_all_rules,
        ..EngineSettings::new("en", "es")
    };
    assert_ok!(Engine::new(settings, Adapters::none()))
}

/// Reasons of a verdict rendered as strings
pub fn reasons(verdict: &Verdict) -> Vec<String> {
    verdict.reasons().iter().map(ToString::to_string).collect()
}

/// Sample pairs covering clean text and the common failure modes
pub const SAMPLE_PAIRS: &[(&str, &str)] = &[
    ("The cat sat on the mat.", "El gato se sentó en la alfombra."),
    ("", "hola"),
    ("hello there", ""),
    ("Hello", "Hello"),
    ("Hello, world!", "hello world"),
    ("a (b", "c (d)"),
    ("Visit http://example.com for more.", "Visite http://example.com para más."),
    ("Home - Products - Shoes - Sale", "Inicio - Productos - Zapatos - Oferta"),
    ("1234 5678 9012 3456", "1234 5678 9012 3456"),
    ("This is a short line of text", "Esto es una línea de texto muy larga que no tiene nada que ver con el original y sigue y sigue"),
    ("!!! ??? ### $$$", "¡¡¡ ¿¿¿ ### $$$"),
    ("Price \\u00e9 included here", "Precio incluido aquí sin duda"),
];
