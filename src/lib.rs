#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]

//! This crate contains the functionality that's used by the `rpm-version` binary: it calculates
//! RPM compatible version and release values from a project version, optionally appends the
//! distribution tag that is reported by `rpm --eval %{?dist}`, and publishes both as named
//! build properties.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use rpm_version::derive_version;
//!
//! let timestamp = Utc.with_ymd_and_hms(2021, 1, 2, 3, 4, 5).unwrap();
//! let result = derive_version("1.2.3-SNAPSHOT", None, &timestamp);
//!
//! assert_eq!(result.version, "1.2.3");
//! assert_eq!(result.release, "SNAPSHOT20210102030405");
//! ```

use chrono::{DateTime, Utc};

mod cli;
pub use cli::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod eval;
pub use eval::*;

mod mapping;
pub use mapping::*;

mod properties;
pub use properties::*;

mod settings;
pub use settings::*;

mod timestamp;
pub use timestamp::*;

mod version;
pub use version::*;

/// This struct collects all inputs of a version and release calculation.
#[derive(Debug, Clone)]
pub struct VersionSpec {
    /// project version, for example `1.2.3-SNAPSHOT`
    pub raw_version: String,
    /// release to use instead of generating one (`None` and empty strings are equivalent)
    pub preset_release: Option<String>,
    /// timestamp that is appended to `SNAPSHOT` releases
    pub build_timestamp: DateTime<Utc>,
    /// whether the distribution tag is appended to the release
    pub append_dist_tag: bool,
}

/// This helper function calculates the version and release for the given inputs.
///
/// If the distribution tag was requested, the macro evaluator is asked exactly once, and the
/// result is appended to the release as-is. Any evaluation error is returned before anything can
/// be published.
pub fn calculate(spec: &VersionSpec, evaluator: &dyn MacroEvaluator) -> Result<RpmVersion, MacroEvaluationError> {
    let mut result = derive_version(
        &spec.raw_version,
        spec.preset_release.as_deref(),
        &spec.build_timestamp,
    );

    if spec.append_dist_tag {
        let dist = evaluator.evaluate(DIST_MACRO)?;
        result.release.push_str(&dist);
    }

    Ok(result)
}

/// This helper function stores the calculated version and release in a property sink.
pub fn publish(result: &RpmVersion, version_property: &str, release_property: &str, sink: &mut dyn PropertySink) {
    for (key, value) in [(version_property, &result.version), (release_property, &result.release)] {
        log::info!("setting [{}] property to value [{}].", key, value);
        sink.set_property(key, value);
    }
}
