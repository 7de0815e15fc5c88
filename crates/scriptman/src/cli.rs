//! CLI definition and command execution.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use scriptman_core::{generate, Config};

pub fn build_cli() -> Command {
    Command::new("scriptman")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate man-page text for helper scripts from their -h output")
        .arg(
            Arg::new("script-dir")
                .long("script-dir")
                .value_name("DIR")
                .help("Directory to scan for scripts (default: ./libexec)"),
        )
        .arg(
            Arg::new("extension")
                .long("extension")
                .value_name("EXT")
                .help("Script file extension, including the dot (default: .sh)"),
        )
        .arg(
            Arg::new("command-name")
                .long("command-name")
                .value_name("NAME")
                .help("Published command name substituted into help text (default: mdl)"),
        )
        .arg(
            Arg::new("launcher-name")
                .long("launcher-name")
                .value_name("NAME")
                .help("Launcher name to replace in captured help text (default: vitepress.js)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Explicit config file (default: ./scriptman.toml if present)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Write the JSON mapping to FILE instead of stdout"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .action(ArgAction::SetTrue)
                .help("Pretty-print the JSON output"),
        )
}

/// Resolve config, run the pipeline and emit the serialized mapping.
///
/// Stdout carries only the JSON mapping; all diagnostics go to stderr
/// via tracing so the output stays pipeable into a site build.
pub fn run(matches: &ArgMatches) -> Result<()> {
    let config = resolve_config(matches)?;

    let mapping = generate(&config)?;

    let json = if matches.get_flag("pretty") {
        mapping.to_json_pretty()
    } else {
        mapping.to_json()
    }
    .context("failed to serialize man page mapping")?;

    match matches.get_one::<String>("output") {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write mapping to {path}"))?;
            tracing::info!(path = %path, scripts = mapping.len(), "wrote man page mapping");
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Layer CLI flags over the file/env config hierarchy.
fn resolve_config(matches: &ArgMatches) -> Result<Config> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };

    if let Some(dir) = matches.get_one::<String>("script-dir") {
        config.script_dir = PathBuf::from(dir);
    }
    if let Some(ext) = matches.get_one::<String>("extension") {
        config.script_ext.clone_from(ext);
    }
    if let Some(name) = matches.get_one::<String>("command-name") {
        config.command_name.clone_from(name);
    }
    if let Some(name) = matches.get_one::<String>("launcher-name") {
        config.launcher_name.clone_from(name);
    }

    // Flags can reintroduce invalid values; check again after layering.
    config.validate()?;
    Ok(config)
}
