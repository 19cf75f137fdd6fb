//! User configuration loaded from `sigfig.toml`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::Category;
use crate::practice::DEFAULT_STREAK_BADGE;

/// Environment variable that overrides `default_category`.
pub const CATEGORY_ENV_VAR: &str = "SIGFIG_DEFAULT_CATEGORY";

/// Name of the per-directory config file.
pub const CONFIG_FILE_NAME: &str = "sigfig.toml";

/// Starter file written by `sigfig init`.
pub const STARTER_CONFIG: &str = r#"# sigfig configuration

# Category used by `sigfig practice` when --category is not given.
# One of: toScientific, fromScientific, countSigFigs, multiplyScientific,
# divideScientific, roundSigFigs, multiplySigFigs, addSigFigs,
# compareScientific, orderMagnitude, sciNotationAdd, mixed
default_category = "toScientific"

# Show the streak badge once this many answers in a row are correct.
streak_badge_threshold = 3

# Print problem hints before asking for an answer.
show_hints = true

# Quiz ratings: at least `quiz_excellent_mark` is excellent, at least
# `quiz_pass_mark` is good.
quiz_pass_mark = 5
quiz_excellent_mark = 7
"#;

/// Top-level sigfig configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigfigConfig {
    /// Practice category when none is given on the command line.
    #[serde(default = "default_category")]
    pub default_category: Category,
    /// Streak length that earns the badge.
    #[serde(default = "default_streak_badge")]
    pub streak_badge_threshold: u32,
    #[serde(default = "default_show_hints")]
    pub show_hints: bool,
    #[serde(default = "default_pass_mark")]
    pub quiz_pass_mark: u32,
    #[serde(default = "default_excellent_mark")]
    pub quiz_excellent_mark: u32,
}

fn default_category() -> Category {
    Category::ToScientific
}
fn default_streak_badge() -> u32 {
    DEFAULT_STREAK_BADGE
}
fn default_show_hints() -> bool {
    true
}
fn default_pass_mark() -> u32 {
    5
}
fn default_excellent_mark() -> u32 {
    7
}

impl Default for SigfigConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            streak_badge_threshold: default_streak_badge(),
            show_hints: default_show_hints(),
            quiz_pass_mark: default_pass_mark(),
            quiz_excellent_mark: default_excellent_mark(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `sigfig.toml` in the current directory
/// 2. `~/.config/sigfig/config.toml`
///
/// Environment variable override: `SIGFIG_DEFAULT_CATEGORY`.
pub fn load_config() -> Result<SigfigConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<SigfigConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => SigfigConfig::default(),
    };

    apply_category_override(&mut config, std::env::var(CATEGORY_ENV_VAR).ok());
    Ok(config)
}

/// Parse a config document. Missing keys take their defaults.
pub fn parse_config(content: &str) -> Result<SigfigConfig> {
    let config: SigfigConfig = toml::from_str(content)?;
    if config.quiz_excellent_mark < config.quiz_pass_mark {
        tracing::warn!(
            pass = config.quiz_pass_mark,
            excellent = config.quiz_excellent_mark,
            "quiz_excellent_mark is below quiz_pass_mark; the good rating is unreachable"
        );
    }
    Ok(config)
}

/// Apply a `SIGFIG_DEFAULT_CATEGORY` value. Unknown names are logged and
/// ignored.
fn apply_category_override(config: &mut SigfigConfig, value: Option<String>) {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return;
    };
    match value.parse::<Category>() {
        Ok(category) => config.default_category = category,
        Err(e) => tracing::warn!("ignoring {CATEGORY_ENV_VAR}: {e}"),
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("sigfig"))
}
