use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::mapping::Mapping;

const CONFIG_FILE: &str = ".config/rpm-version.toml";

/// This struct represents the contents of a `~/.config/rpm-version.toml` file.
#[derive(Debug, Default, Deserialize)]
pub struct RpmVersionConfig {
    /// This section contains defaults for the command line options.
    #[serde(rename(deserialize = "rpm-version"))]
    pub settings: Option<SettingsConfig>,
    /// File mappings, one `[[mapping]]` table each.
    #[serde(default, rename(deserialize = "mapping"))]
    pub mappings: Vec<Mapping>,
}

/// This config file section contains defaults for the command line options.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SettingsConfig {
    /// name of the property that receives the version
    pub version_property: Option<String>,
    /// name of the property that receives the release
    pub release_property: Option<String>,
    /// release to use instead of generating one
    pub release: Option<String>,
    /// append the distribution tag to the release
    pub dist: Option<bool>,
    /// path of the `rpm` executable
    pub rpm: Option<PathBuf>,
}

/// This helper function returns the path of the default configuration file.
pub fn default_config_path() -> Result<PathBuf, String> {
    match dirs::home_dir() {
        Some(home) => Ok(home.join(CONFIG_FILE)),
        None => Err(String::from("Unable to determine $HOME.")),
    }
}

/// This helper function reads and parses a configuration file.
pub fn read_config(config_path: &Path) -> Result<RpmVersionConfig, String> {
    let config_str = match read_to_string(config_path) {
        Ok(string) => string,
        Err(error) => {
            return Err(format!(
                "Unable to read configuration file from {}: {}",
                config_path.display(),
                error
            ));
        },
    };

    parse_config(&config_str).map_err(|error| {
        format!(
            "Unable to parse configuration file from {}: {}",
            config_path.display(),
            error
        )
    })
}

/// This helper function parses the contents of a configuration file.
pub fn parse_config(config_str: &str) -> Result<RpmVersionConfig, toml::de::Error> {
    toml::from_str(config_str)
}

/// This helper function loads the configuration.
///
/// An explicitly requested file must exist. The default file at `~/.config/rpm-version.toml` is
/// optional; `Ok(None)` is returned if it is not present.
pub fn get_config(explicit: Option<&Path>) -> Result<Option<RpmVersionConfig>, String> {
    if let Some(path) = explicit {
        return read_config(path).map(Some);
    }

    let path = default_config_path()?;
    if !path.exists() {
        log::debug!("No configuration file at {}.", path.display());
        return Ok(None);
    }

    read_config(&path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config() {
        let config = parse_config(
            r#"
            [rpm-version]
            version-property = "app.version"
            release-property = "app.release"
            dist = true
            rpm = "/usr/bin/rpm"

            [[mapping]]
            directory = "/etc/app"
            configuration = true
            sources = ["app.conf"]

            [[mapping]]
            directory = "/var/log/app"
            "#,
        )
        .unwrap();

        let settings = config.settings.unwrap();
        assert_eq!(settings.version_property.as_deref(), Some("app.version"));
        assert_eq!(settings.release_property.as_deref(), Some("app.release"));
        assert_eq!(settings.release, None);
        assert_eq!(settings.dist, Some(true));
        assert_eq!(settings.rpm, Some(PathBuf::from("/usr/bin/rpm")));

        assert_eq!(config.mappings.len(), 2);
        assert!(config.mappings[0].configuration);
        assert_eq!(config.mappings[1].sources, None);
    }

    #[test]
    fn empty_config() {
        let config = parse_config("").unwrap();
        assert!(config.settings.is_none());
        assert!(config.mappings.is_empty());
    }

    #[test]
    fn invalid_config() {
        assert!(parse_config("[rpm-version]\ndist = \"yes\"\n").is_err());
    }

    #[test]
    fn missing_explicit_config() {
        let error = get_config(Some(Path::new("/nonexistent/rpm-version.toml"))).unwrap_err();
        assert!(error.starts_with("Unable to read configuration file"));
    }
}
