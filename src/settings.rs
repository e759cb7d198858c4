use std::path::PathBuf;

use crate::config::{RpmVersionConfig, SettingsConfig};
use crate::eval::DEFAULT_RPM;
use crate::properties::{DEFAULT_RELEASE_PROPERTY, DEFAULT_VERSION_PROPERTY};
use crate::Command;

/// Effective options after merging command line arguments, configuration file, and defaults.
#[derive(Debug, PartialEq)]
pub struct Settings {
    /// name of the property that receives the version
    pub version_property: String,
    /// name of the property that receives the release
    pub release_property: String,
    /// release to use instead of generating one
    pub release: Option<String>,
    /// append the distribution tag to the release
    pub dist: bool,
    /// executable used to evaluate macros
    pub rpm: PathBuf,
}

impl Settings {
    /// Command line arguments take precedence over the configuration file.
    pub fn resolve(args: &Command, config: Option<&RpmVersionConfig>) -> Settings {
        let section = config.and_then(|config| config.settings.as_ref());

        Settings {
            version_property: args
                .version_property
                .clone()
                .or_else(|| section.and_then(|cfg| cfg.version_property.clone()))
                .unwrap_or_else(|| DEFAULT_VERSION_PROPERTY.to_string()),
            release_property: args
                .release_property
                .clone()
                .or_else(|| section.and_then(|cfg| cfg.release_property.clone()))
                .unwrap_or_else(|| DEFAULT_RELEASE_PROPERTY.to_string()),
            release: args
                .release
                .clone()
                .or_else(|| section.and_then(|cfg| cfg.release.clone())),
            dist: do_append_dist(args, section),
            rpm: args
                .rpm
                .clone()
                .or_else(|| section.and_then(|cfg| cfg.rpm.clone()))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RPM)),
        }
    }
}

fn do_append_dist(args: &Command, section: Option<&SettingsConfig>) -> bool {
    args.dist || section.and_then(|cfg| cfg.dist).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use clap::Parser;

    fn args(argv: &[&str]) -> Command {
        let mut full = vec!["rpm-version"];
        full.extend_from_slice(argv);
        Command::parse_from(full)
    }

    #[test]
    fn defaults() {
        let settings = Settings::resolve(&args(&["1.0"]), None);

        assert_eq!(
            settings,
            Settings {
                version_property: String::from("rpm.version"),
                release_property: String::from("rpm.release"),
                release: None,
                dist: false,
                rpm: PathBuf::from("rpm"),
            }
        );
    }

    #[test]
    fn config_overrides_defaults() {
        let config = parse_config(
            r#"
            [rpm-version]
            version-property = "pkg.version"
            release = "3"
            dist = true
            rpm = "/opt/rpm/bin/rpm"
            "#,
        )
        .unwrap();

        let settings = Settings::resolve(&args(&["1.0"]), Some(&config));

        assert_eq!(settings.version_property, "pkg.version");
        assert_eq!(settings.release_property, "rpm.release");
        assert_eq!(settings.release.as_deref(), Some("3"));
        assert!(settings.dist);
        assert_eq!(settings.rpm, PathBuf::from("/opt/rpm/bin/rpm"));
    }

    #[test]
    fn args_override_config() {
        let config = parse_config(
            r#"
            [rpm-version]
            version-property = "pkg.version"
            release = "3"
            dist = false
            "#,
        )
        .unwrap();

        let settings = Settings::resolve(
            &args(&[
                "1.0",
                "--version-property",
                "cli.version",
                "--release",
                "9",
                "--dist",
                "--rpm",
                "./fake-rpm",
            ]),
            Some(&config),
        );

        assert_eq!(settings.version_property, "cli.version");
        assert_eq!(settings.release.as_deref(), Some("9"));
        assert!(settings.dist);
        assert_eq!(settings.rpm, PathBuf::from("./fake-rpm"));
    }

    #[test]
    fn print_mappings_does_not_need_version() {
        let args = args(&["--print-mappings"]);
        assert!(args.print_mappings);
        assert_eq!(args.project_version, None);
    }

    #[test]
    fn version_is_required() {
        assert!(Command::try_parse_from(["rpm-version"]).is_err());
    }

    #[test]
    fn print_mappings_conflicts_with_property_output() {
        assert!(Command::try_parse_from(["rpm-version", "1.0", "--print-mappings", "--json"]).is_err());
        assert!(Command::try_parse_from(["rpm-version", "1.0", "-m", "--output", "out.properties"]).is_err());
        assert!(Command::try_parse_from(["rpm-version", "1.0", "--json", "--output", "out.json"]).is_ok());
    }
}
