//! Initialize a hardrules configuration
//!
//! Writes a commented hardrules.toml listing every setting and rule override.

use crate::config::CONFIG_FILE;
use std::fs;
use std::path::Path;

/// Default content for hardrules.toml
const DEFAULT_HARDRULES_TOML: &str = r#"[hardrules]
# Language pair, ISO 639-1 (can also be given with -s/-t)
# source_lang = "en"
# target_lang = "es"

# Report every failing rule instead of the first one
# run_all_rules = false

# Minimum fluency score for lm_filter, in (0, 1]
# lm_threshold = 0.5

# disable_lang_ident = false
# disable_minimal_length = false
# disable_porn_removal = false
# disable_lm_filter = false

[rules]
# Every rule runs with its default unless overridden here.
# Disable a rule:      no_titles = false
# Enable a rule:       no_urls = true
# Change a parameter:  not_too_long = 512
#                      not_too_short = 5
#                      length_ratio = 1.5
#                      no_literals = ["Re:", "{{", "%s", "}}", "+++", "***", "=\""]
"#;

/// Error type for init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Path error
    #[error("Path error: {0}")]
    Path(String),
}

/// Result of init command
#[derive(Debug, Default, PartialEq, Eq)]
pub struct InitResult {
    /// Files that were created
    pub created: Vec<String>,
    /// Files that were skipped (already existed)
    pub skipped: Vec<String>,
    /// Files that were overwritten
    pub overwritten: Vec<String>,
}

/// Run the init command in the current directory
///
/// # Arguments
/// * `force` - If true, overwrite an existing file. If false, leave it alone.
pub fn run_init(force: bool) -> Result<InitResult, InitError> {
    run_init_in(Path::new("."), force)
}

/// Run the init command in `dir`
pub fn run_init_in(dir: &Path, force: bool) -> Result<InitResult, InitError> {
    if !dir.is_dir() {
        return Err(InitError::Path(format!(
            "'{}' is not a directory",
            dir.display()
        )));
    }

    let mut result = InitResult::default();
    handle_file(
        &dir.join(CONFIG_FILE),
        DEFAULT_HARDRULES_TOML,
        force,
        &mut result,
    )?;
    Ok(result)
}

/// Handle creation of a single file
fn handle_file(
    path: &Path,
    content: &str,
    force: bool,
    result: &mut InitResult,
) -> Result<(), InitError> {
    let name = file_name(path)?;

    if path.exists() {
        if force {
            fs::write(path, content)?;
            result.overwritten.push(name);
        } else {
            result.skipped.push(name);
        }
    } else {
        fs::write(path, content)?;
        result.created.push(name);
    }

    Ok(())
}

fn file_name(path: &Path) -> Result<String, InitError> {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .ok_or_else(|| InitError::Path(format!("Invalid file name: {:?}", path)))
}
