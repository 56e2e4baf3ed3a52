//! Layered generator settings.
//!
//! Precedence, lowest first: built-in defaults, the TOML settings file,
//! `SCENARIO_FORGE_*` environment variables, explicit CLI flags.

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use scenario_forge::params::{CourseParams, GroupParams};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::CliOverrides;
use crate::error::{Result, ScenarioForgeError};

/// Settings file read from the working directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "scenario-forge.toml";
/// Prefix of environment variables overriding settings.
pub const ENV_PREFIX: &str = "SCENARIO_FORGE_";

/// Everything the generator needs besides the configuration matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Directory the feature file is written to.
    pub out_dir: Utf8PathBuf,
    /// Feature file name.
    pub file_name: String,
    /// Feature title.
    pub title: String,
    /// Tags, without the leading `@`.
    pub tags: Vec<String>,
    /// Free-text header comments, one paragraph each.
    pub comments: Vec<String>,
    /// Courses every user is enrolled in.
    pub courses: Vec<CourseParams>,
    /// Group roster; empty selects the standard roster.
    pub roster: Vec<GroupParams>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            out_dir: Utf8PathBuf::from("features"),
            file_name: String::from("ferpa.feature"),
            title: String::from("Quickmail FERPA group visibility"),
            tags: vec![String::from("block_quickmail"), String::from("ferpa")],
            comments: Vec::new(),
            courses: vec![CourseParams {
                fullname: String::from("Course 1"),
                shortname: String::from("C1"),
            }],
            roster: Vec::new(),
        }
    }
}

/// Merge every settings layer.
///
/// An explicit `config` path must exist; the default file is optional.
///
/// # Errors
///
/// Returns [`ScenarioForgeError::MissingSettingsFile`] for a missing explicit
/// file and [`ScenarioForgeError::Settings`] when a layer fails to parse or
/// the merged values do not fit [`GeneratorSettings`].
pub fn load(config: Option<&Utf8Path>, overrides: &CliOverrides) -> Result<GeneratorSettings> {
    let file_layer = match config {
        Some(path) if !path.is_file() => {
            return Err(ScenarioForgeError::MissingSettingsFile(path.to_path_buf()));
        }
        Some(path) => Toml::file_exact(path),
        None => Toml::file(DEFAULT_SETTINGS_FILE),
    };
    let file = config.map_or(DEFAULT_SETTINGS_FILE, Utf8Path::as_str);
    let settings: GeneratorSettings = Figment::from(Serialized::defaults(GeneratorSettings::default()))
        .merge(file_layer)
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides))
        .extract()?;
    debug!(file = %file, out_dir = %settings.out_dir, "loaded generator settings");
    Ok(settings)
}
