#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]

//! This crate contains the `rpm-version` binary. It prints the RPM version and release that
//! correspond to a project version as build properties.

use std::env;

use clap::Parser;

use rpm_version::{
    build_timestamp, calculate, get_config, mappings_listing, publish, Command, Properties, RpmEval, Settings,
    VersionSpec, SOURCE_DATE_EPOCH,
};

fn main() -> Result<(), String> {
    let args: Command = Command::parse();

    // set up logger for warnings / debug messages
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .filter_level(level)
        .parse_env("RPM_VERSION_LOG")
        .init();

    let config = get_config(args.config.as_deref())?;
    let settings = Settings::resolve(&args, config.as_ref());

    if args.print_mappings {
        let mappings = config.as_ref().map(|config| config.mappings.as_slice()).unwrap_or_default();
        if mappings.is_empty() {
            log::warn!("No file mappings are configured.");
        }
        print!("{}", mappings_listing(mappings));
        return Ok(());
    };

    let raw_version = match &args.project_version {
        Some(version) => version.clone(),
        None => return Err(String::from("No project version given.")),
    };

    let source_date_epoch = env::var(SOURCE_DATE_EPOCH).ok();
    let timestamp = build_timestamp(args.timestamp.as_deref(), source_date_epoch.as_deref())?;

    let spec = VersionSpec {
        raw_version,
        preset_release: settings.release.clone(),
        build_timestamp: timestamp,
        append_dist_tag: settings.dist,
    };

    // nothing is published if rpm fails
    let evaluator = RpmEval::new(&settings.rpm);
    let result = calculate(&spec, &evaluator).map_err(|error| error.to_string())?;

    let mut properties = Properties::new();
    publish(
        &result,
        &settings.version_property,
        &settings.release_property,
        &mut properties,
    );

    match &args.output {
        Some(path) => properties.write_to(path, args.json)?,
        None if args.json => println!("{}", properties.to_json_string()?),
        None => print!("{}", properties.to_properties_string()),
    };

    Ok(())
}
