use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use url_location::config::LocationConfig;
use url_location::url_value::validator::is_valid_scheme;
use url_location::utils::logger::init_logger;
use url_location::{is_absolute, make_absolute, Components, Location, LocationProperties};

/// Inspect, edit and resolve URLs through a browser-style location
#[derive(Debug, Parser)]
#[command(name = "location", version)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every location property of a URL
    Inspect { url: String },
    /// Apply component assignments in order and print the resulting href
    Edit {
        url: String,
        /// component=value, e.g. --set pathname=docs --set port=8080
        #[arg(long = "set", value_name = "COMPONENT=VALUE")]
        assignments: Vec<String>,
    },
    /// Resolve a relative path against a base URL
    Resolve { base: String, relative: String },
    /// Report whether a URL is absolute or relative
    Check { url: String },
}

/// JSON output of `inspect`: formatted properties plus the raw components
#[derive(Debug, Serialize)]
struct InspectReport {
    properties: LocationProperties,
    components: Components,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = LocationConfig::load(cli.config.as_deref())?;
    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_logger(log_level, config.log_dir.as_deref())?;
    let json = cli.json || config.json;

    match cli.command {
        Command::Inspect { url } => inspect(&Location::new(&url), json),
        Command::Edit { url, assignments } => {
            let mut location = Location::new(&url);
            for assignment in &assignments {
                apply_assignment(&mut location, assignment)?;
            }
            print_value("href", &location.href(), json)
        }
        Command::Resolve { base, relative } => {
            print_value("href", &make_absolute(&base, &relative), json)
        }
        Command::Check { url } => {
            let kind = if is_absolute(&url) { "absolute" } else { "relative" };
            print_value("kind", kind, json)
        }
    }
}

fn inspect(location: &Location, json: bool) -> Result<()> {
    let report = InspectReport {
        properties: location.properties(),
        components: location.url().components(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let properties = &report.properties;
    for (name, value) in [
        ("origin", &properties.origin),
        ("protocol", &properties.protocol),
        ("username", &properties.username),
        ("password", &properties.password),
        ("host", &properties.host),
        ("hostname", &properties.hostname),
        ("port", &properties.port),
        ("pathname", &properties.pathname),
        ("search", &properties.search),
        ("hash", &properties.hash),
        ("href", &properties.href),
        ("data", &properties.data),
    ] {
        println!("{:<12}{}", name, value);
    }
    println!("{:<12}{}", "is_relative", properties.is_relative);
    Ok(())
}

fn apply_assignment(location: &mut Location, assignment: &str) -> Result<()> {
    let (component, value) = assignment
        .split_once('=')
        .with_context(|| format!("Expected COMPONENT=VALUE, got '{}'", assignment))?;

    match component {
        "protocol" => {
            if !is_valid_scheme(value) {
                warn!("'{}' is not a well-formed scheme, storing it anyway", value);
            }
            location.set_protocol(value);
        }
        "username" => location.set_user_name(value),
        "password" => location.set_password(value),
        "host" => location.set_host(value),
        "hostname" => location.set_host_name(value),
        "port" => location.set_port(value),
        "pathname" => location.set_path_name(value),
        "search" => location.set_search(value),
        "hash" => location.set_hash(value),
        "href" => location.set_href(value),
        other => bail!("Unknown location component '{}'", other),
    }
    Ok(())
}

fn print_value(name: &str, value: &str, json: bool) -> Result<()> {
    if json {
        let mut object = serde_json::Map::new();
        object.insert(name.to_string(), json!(value));
        println!("{}", serde_json::to_string(&object)?);
    } else {
        println!("{}", value);
    }
    Ok(())
}
