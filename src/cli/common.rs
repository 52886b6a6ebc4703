//! Common helper functions shared across CLI commands
//!
//! Configuration discovery, engine settings assembly, adapter construction
//! and logging setup.

use crate::adapters::{Adapters, WhatlangIdentifier};
use crate::cli::args::FilterArgs;
use crate::config::{CONFIG_FILE, Config};
use crate::engine::EngineSettings;
use crate::error::ConfigError;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RECORD_ERRORS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Load hardrules.toml configuration
///
/// An explicit path must exist. Without one, `./hardrules.toml` is used when
/// present and the defaults otherwise.
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read and
/// `ConfigError::Parse` if it is invalid.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return Config::load(path);
    }

    let default_path = Path::new(CONFIG_FILE);
    if default_path.exists() {
        tracing::debug!("Using configuration from {}", default_path.display());
        Config::load(default_path)
    } else {
        Ok(Config::default())
    }
}

/// Merge command-line options over the configuration file
///
/// Languages given on the command line win over the file; boolean switches
/// can only turn a feature on (or a check off), never undo the file.
pub(crate) fn build_settings(
    args: &FilterArgs,
    config: &Config,
) -> Result<EngineSettings, ConfigError> {
    let mut merged = config.clone();
    if let Some(lang) = &args.source_lang {
        merged.hardrules.source_lang = Some(lang.clone());
    }
    if let Some(lang) = &args.target_lang {
        merged.hardrules.target_lang = Some(lang.clone());
    }

    let mut settings = merged.engine_settings()?;
    settings.run_all_rules |= args.run_all_rules;
    settings.disable_lang_ident |= args.disable_lang_ident;
    settings.disable_minimal_length |= args.disable_minimal_length;
    settings.disable_porn_removal |= args.disable_porn_removal;
    settings.disable_lm_filter |= args.disable_lm_filter;
    if let Some(threshold) = args.lm_threshold {
        settings.lm_threshold = threshold;
    }
    Ok(settings)
}

/// Scorer adapters available to the command-line tool
///
/// Only language identification has a bundled backend. Fluency scoring and
/// porn classification are left to library users.
pub(crate) fn build_adapters(settings: &EngineSettings) -> Adapters {
    if settings.disable_lang_ident {
        return Adapters::none();
    }
    Adapters::none().with_lang_ident(WhatlangIdentifier::new(), WhatlangIdentifier::new())
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the flags when set.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(quiet: bool, debug: bool, logfile: Option<&PathBuf>) -> std::io::Result<()> {
    let level = if quiet {
        "error"
    } else if debug {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (writer, ansi) = match logfile {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    // A subscriber may already be installed (tests); keep the existing one
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(false),
        )
        .try_init();
    Ok(())
}
