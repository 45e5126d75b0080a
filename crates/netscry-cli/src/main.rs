//! netscry CLI
//!
//! Checks whether a username or phone number is registered across the
//! configured catalog of sites and renders the results to the console,
//! optionally exporting an HTML report.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use netscry_catalog::{AgentPool, Catalog};
use netscry_core::AppConfig;
use netscry_search::SearchOrchestrator;

mod render;
mod report;

const BANNER: &str = r"
              __
   ____  ___ / /_______________  __
  / __ \/ _ \/ __/ ___/ ___/ __/ / /
 / / / /  __/ /_(__  ) /__/ /  \  /
/_/ /_/\___/\__/____/\___/_/   /_/
";

#[derive(Parser)]
#[command(name = "netscry")]
#[command(author, version, about = "Check whether an identifier is registered across a catalog of sites", long_about = None)]
struct Cli {
    /// Username(s) to search, comma separated
    #[arg(short = 'u', long = "usernames", value_name = "LIST")]
    usernames: Option<String>,

    /// Phone number(s) to search, comma separated
    #[arg(short = 'p', long = "phone-numbers", value_name = "LIST")]
    phone_numbers: Option<String>,

    /// Show every result with response codes and matched patterns
    #[arg(long)]
    verbose: bool,

    /// Export the results to an HTML report
    #[arg(long)]
    export_results: bool,

    /// List the sites searched by username, without probing
    #[arg(long)]
    username_sites: bool,

    /// List the sites searched by phone number, without probing
    #[arg(long)]
    phone_number_sites: bool,

    /// Log verbosity (0-3)
    #[arg(short = 'l', long, default_value = "1", value_name = "LEVEL")]
    log: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = match cli.log {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    println!("{}", BANNER.cyan());
    println!("{} v{}\n", "netscry".bold(), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load_with_env().context("failed to load configuration")?;

    if cli.username_sites {
        return list_sites(&config.catalogs.usernames);
    }
    if cli.phone_number_sites {
        return list_sites(&config.catalogs.phone_numbers);
    }

    let (raw_targets, catalog_path) = if let Some(numbers) = &cli.phone_numbers {
        (numbers.as_str(), &config.catalogs.phone_numbers)
    } else if let Some(usernames) = &cli.usernames {
        (usernames.as_str(), &config.catalogs.usernames)
    } else {
        bail!("a username (-u) or phone number (-p) is required; see --help");
    };

    let identifiers = split_identifiers(raw_targets);
    if identifiers.is_empty() {
        bail!("no usable identifiers were supplied after splitting on commas");
    }

    let agents = Arc::new(
        AgentPool::load(&config.catalogs.user_agents)
            .context("failed to load user agent pool")?,
    );
    let catalog = Catalog::load(catalog_path).context("failed to load site catalog")?;

    let orchestrator = SearchOrchestrator::new().context("failed to build search client")?;
    let results = orchestrator
        .search(&identifiers, &agents, &catalog, cli.verbose)
        .await?;

    render::print_results(&results, cli.verbose);

    if cli.export_results {
        report::write_html(&results, &config.output.report_path)
            .context("failed to write HTML report")?;
        println!(
            "{}",
            format!(
                "Results have been saved to '{}'",
                config.output.report_path.display()
            )
            .cyan()
        );
    }

    Ok(())
}

/// Split a comma-separated identifier list, trimming parts and discarding
/// blanks.
fn split_identifiers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Print every site and URL template the given catalog would probe.
fn list_sites(path: &std::path::Path) -> Result<()> {
    let catalog = Catalog::load(path).context("failed to load site catalog")?;

    println!(
        "{}",
        format!("Sites searched by {} ({} total):", catalog.kind(), catalog.site_count()).bold()
    );

    for (category, sites) in catalog.categories() {
        println!("\n{}", category.blue().bold());
        for (name, definition) in sites {
            let url = definition
                .url_template
                .as_deref()
                .unwrap_or("no URL configured");
            println!("- {name}: {url}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_identifiers() {
        assert_eq!(
            split_identifiers("alice, bob ,,  , carol"),
            ["alice", "bob", "carol"]
        );
        assert!(split_identifiers("  ,  ").is_empty());
        assert!(split_identifiers("").is_empty());
    }
}
