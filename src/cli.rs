use clap::Parser;

/// Calculates RPM version and release values from a project version and prints them as build
/// properties.
///
/// Everything after the first "-" of the project version is treated as a modifier: the RPM
/// version is the part before it. Unless a release is given, it is generated from the modifier:
/// no modifier gives "1", dashes are replaced with underscores, a modifier ending with "SNAPSHOT"
/// gets the UTC build timestamp appended, any other modifier gets "_1" appended.
///
/// Defaults for most options can be set in ~/.config/rpm-version.toml, in the [rpm-version]
/// section:
///
/// version-property = string: Name of the version property (default: rpm.version).
///
/// release-property = string: Name of the release property (default: rpm.release).
///
/// release = string: Release to use instead of generating one.
///
/// dist = bool: Append the distribution tag to the release; equivalent to the --dist switch.
///
/// rpm = string: Path of the rpm executable used to evaluate the %{?dist} macro.
///
/// File mappings can be listed as [[mapping]] tables and printed with --print-mappings, which
/// prints them instead of the properties.
#[derive(Debug, Parser)]
pub struct Command {
    /// Project version to calculate the RPM version and release from
    #[arg(value_name = "VERSION", required_unless_present = "print_mappings")]
    pub project_version: Option<String>,
    /// Use this release instead of generating one
    #[arg(long, short)]
    pub release: Option<String>,
    /// Append the distribution tag (%{?dist}) to the release
    #[arg(long, short)]
    pub dist: bool,
    /// Build timestamp (RFC 3339) used for SNAPSHOT releases [default: $SOURCE_DATE_EPOCH or now]
    #[arg(long, short)]
    pub timestamp: Option<String>,
    /// Name of the property that receives the version
    #[arg(long)]
    pub version_property: Option<String>,
    /// Name of the property that receives the release
    #[arg(long)]
    pub release_property: Option<String>,
    /// Path of the rpm executable
    #[arg(long)]
    pub rpm: Option<std::path::PathBuf>,
    /// Read configuration from this file instead of ~/.config/rpm-version.toml
    #[arg(long, short)]
    pub config: Option<std::path::PathBuf>,
    /// Write properties to this file instead of standard output
    #[arg(long, short)]
    pub output: Option<std::path::PathBuf>,
    /// Print properties as a JSON object
    #[arg(long, short)]
    pub json: bool,
    /// Print the file mappings from the configuration file instead of the properties
    #[arg(long, short = 'm', conflicts_with_all = ["json", "output"])]
    pub print_mappings: bool,
    /// Print debug messages and the commands that are run
    #[arg(long, short)]
    pub verbose: bool,
}
