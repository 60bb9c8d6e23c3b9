//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["zar.toml", ".zar.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `ZAR_`-prefixed environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./zar.toml` or `./.zar.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/zar-chat/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::layered(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path,
        )
        .extract()
        .map_err(Box::new)
    }

    /// Files merged by [`Self::figment`], then `ZAR_*` environment on top
    fn layered(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        Self::figment(global, project, explicit).merge(Env::prefixed("ZAR_").split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Merge defaults and the given files, lowest priority first
    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        // An explicit path that does not exist is an error, not a silent skip
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/zar-chat/config.toml if set,
    /// otherwise the platform config directory equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("zar-chat").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [ENV  ] Variables: ZAR_SERVER__ENDPOINT, ZAR_OUTPUT__COLOR, ...");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./zar.toml or ./.zar.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::io::Write;

    fn write_toml(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("zar-chat"));
    }

    #[test]
    fn test_explicit_file_overrides_project_and_global() {
        let dir = tempfile::tempdir().unwrap();
        let global = write_toml(
            &dir,
            "global.toml",
            "[server]\nendpoint = \"http://global:1\"\n[output]\ncolor = false\n",
        );
        let project = write_toml(
            &dir,
            "project.toml",
            "[server]\nendpoint = \"http://project:2\"\n",
        );
        let explicit = write_toml(
            &dir,
            "explicit.toml",
            "[widget]\ncontacts = [\"Ana\", \"Bruno\"]\n",
        );

        let config: FileConfig = ConfigLoader::figment(
            Some(global.as_path()),
            Some(project.as_path()),
            Some(explicit.as_path()),
        )
        .extract()
        .unwrap();

        assert_eq!(config.server.endpoint, "http://project:2");
        assert!(!config.output.color);
        assert_eq!(config.widget.contacts, vec!["Ana", "Bruno"]);
        assert_eq!(config.widget.send_label, "Enviar");
    }

    #[test]
    fn test_missing_optional_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let config: FileConfig =
            ConfigLoader::figment(Some(missing.as_path()), Some(missing.as_path()), None)
                .extract()
                .unwrap();

        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let result: Result<FileConfig, _> =
            ConfigLoader::figment(None, None, Some(missing.as_path())).extract();

        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides_explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "explicit.toml",
                "[server]\nendpoint = \"http://file:1\"\n[widget]\nbot_name = \"Ajuda\"\n",
            )?;
            jail.set_env("ZAR_SERVER__ENDPOINT", "http://env:2");
            jail.set_env("ZAR_OUTPUT__COLOR", "false");

            let config: FileConfig =
                ConfigLoader::layered(None, None, Some(Path::new("explicit.toml"))).extract()?;

            assert_eq!(config.server.endpoint, "http://env:2");
            assert!(!config.output.color);
            assert_eq!(config.widget.bot_name, "Ajuda");
            Ok(())
        });
    }

    #[test]
    fn test_cli_overrides_env() {
        Jail::expect_with(|jail| {
            jail.set_env("ZAR_SERVER__ENDPOINT", "http://env:2");

            let mut config: FileConfig = ConfigLoader::layered(None, None, None).extract()?;
            assert_eq!(config.server.endpoint, "http://env:2");

            config.apply_overrides(Some("http://cli:3"), true);
            assert_eq!(config.server.endpoint, "http://cli:3");
            assert!(!config.output.color);
            Ok(())
        });
    }
}
