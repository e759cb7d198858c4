use std::cmp::PartialEq;
use std::fmt::Display;

use chrono::{DateTime, Utc};

/// Format of the timestamp that is appended to `SNAPSHOT` releases.
pub const SNAPSHOT_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// This struct encapsulates the version and release parts of an RPM package.
#[derive(Clone, Debug, PartialEq)]
pub struct RpmVersion {
    /// version of the package
    pub version: String,
    /// release of the package
    pub release: String,
}

impl Display for RpmVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{}", self.version, self.release)
    }
}

/// This helper function calculates RPM compatible version and release values from a project
/// version.
///
/// Everything after the first `-` of the project version is the "modifier". The version is the
/// part before the modifier. If no release was preset, it is generated from the modifier:
///
///  - if there is no modifier, the release is `1`,
///  - all `-` characters in the modifier are replaced with `_`,
///  - if the modifier ends with `SNAPSHOT`, the UTC build timestamp is appended,
///  - otherwise, `_1` is appended.
pub fn derive_version(raw_version: &str, preset_release: Option<&str>, build_timestamp: &DateTime<Utc>) -> RpmVersion {
    let preset_release = preset_release.filter(|release| !release.is_empty());

    let (version, release) = match raw_version.split_once('-') {
        None => {
            let release = preset_release.unwrap_or("1").to_string();
            (raw_version.to_string(), release)
        },
        Some((version, modifier)) => {
            log::warn!("rpm version string truncated to {}", version);

            let release = match preset_release {
                Some(release) => release.to_string(),
                None => release_from_modifier(modifier, build_timestamp),
            };

            (version.to_string(), release)
        },
    };

    RpmVersion { version, release }
}

fn release_from_modifier(modifier: &str, build_timestamp: &DateTime<Utc>) -> String {
    let mut release = modifier.replace('-', "_");

    if release.ends_with("SNAPSHOT") {
        release.push_str(&build_timestamp.format(SNAPSHOT_TIMESTAMP_FORMAT).to_string());
    } else {
        release.push_str("_1");
    }

    release
}
