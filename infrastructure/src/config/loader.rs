//! Configuration file loader with multi-source merging

use super::error::ConfigError;
use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use helpdesk_domain::ConfigIssue;
use std::path::{Path, PathBuf};

/// Application directory under the user's config dir.
const APP_DIR: &str = "voice-helpdesk";

/// Project-level config file names, in lookup order.
const PROJECT_FILES: [&str; 2] = ["helpdesk.toml", ".helpdesk.toml"];

/// Prefix of environment overrides, e.g. `HELPDESK_KNOWLEDGE__BUCKET`.
pub const ENV_PREFIX: &str = "HELPDESK_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `HELPDESK_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./helpdesk.toml` or `./.helpdesk.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/voice-helpdesk/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load and validate.
    ///
    /// Error-severity issues fail the load; warnings are returned for the
    /// caller to report.
    pub fn load_validated(
        config_path: Option<&Path>,
    ) -> Result<(FileConfig, Vec<ConfigIssue>), ConfigError> {
        let config = Self::load(config_path)?;
        Self::check(config)
    }

    /// Split validation issues into a hard failure or the remaining warnings.
    pub fn check(config: FileConfig) -> Result<(FileConfig, Vec<ConfigIssue>), ConfigError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            config.validate().into_iter().partition(|i| i.is_error());
        if !errors.is_empty() {
            return Err(ConfigError::Invalid(
                errors.into_iter().map(|i| i.message).collect(),
            ));
        }
        Ok((config, warnings))
    }

    /// The merged provider stack, before extraction.
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:      {ENV_PREFIX}<SECTION>__<KEY>");

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{mark:<5}] Explicit: {}", path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project:  {}", path.display());
        } else {
            println!("  [     ] Project:  ./helpdesk.toml or ./.helpdesk.toml");
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{mark}] Global:   {}", path.display());
        }

        println!("  [     ] Default:  built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("voice-helpdesk"));
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[knowledge]\nlocal_path = \"records.json\"\ntop_k = 7\n\n[metrics]\nenvironment = \"staging\""
        )
        .unwrap();

        let config: FileConfig = ConfigLoader::figment(Some(file.path()))
            .extract()
            .unwrap();
        assert_eq!(config.knowledge.top_k, 7);
        assert_eq!(
            config.knowledge.local_path,
            Some(PathBuf::from("records.json"))
        );
        assert_eq!(config.metrics.environment, "staging");
        // Untouched sections keep their defaults
        assert_eq!(config.generation.max_tokens, 500);
    }

    #[test]
    fn test_check_rejects_out_of_range_values() {
        let mut config = FileConfig::default();
        config.escalation.confidence_threshold = Some(2.0);

        let err = ConfigLoader::check(config).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msgs) if msgs.len() == 1));
        assert!(err.to_string().contains("escalation.confidence_threshold"));
    }

    #[test]
    fn test_check_passes_warnings_through() {
        let (_, warnings) = ConfigLoader::check(FileConfig::default()).unwrap();
        assert!(warnings.iter().all(|w| !w.is_error()));
        assert!(!warnings.is_empty());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[knowledge]\ntop_k = \"many\"").unwrap();

        assert!(ConfigLoader::load(Some(file.path())).is_err());
    }
}
