//! Console rendering of the search result tree.
//!
//! The core's result types carry no presentation markup; this module maps
//! each status to a glyph and color at render time. Non-verbose output
//! shows hits only; verbose output shows every probe with response codes
//! and the matched patterns.

use colored::{ColoredString, Colorize};
use netscry_core::{ProbeStatus, SiteResult, TargetResult};

/// Print the full result tree to stdout.
pub fn print_results(results: &[TargetResult], verbose: bool) {
    for target in results {
        println!("\n{}", format!("Results for {}:", target.target).cyan().bold());

        for category in &target.categories {
            println!("{}", format!("=== {} ===", category.name).blue().bold());

            for site in &category.sites {
                if !verbose && !site.status.is_hit() {
                    continue;
                }
                println!("{}", format_site_line(site, verbose));
            }
        }

        println!(
            "{}",
            format!(
                "{} of {} sites reported a hit for {}.",
                target.hit_count(),
                target.site_count(),
                target.target
            )
            .bold()
        );
    }
}

fn format_site_line(site: &SiteResult, verbose: bool) -> String {
    let mut line = match &site.url {
        Some(url) => format!("{} {}: {} ({})", glyph(site.status), site.name, site.message, url),
        None => format!("{} {}: {}", glyph(site.status), site.name, site.message),
    };

    if verbose {
        if let Some(code) = site.response_code {
            line.push_str(&format!(" [HTTP {code}]"));
        }
        if !site.matched_check_texts.is_empty() {
            line.push_str(&format!(
                " (matched check_text: {})",
                site.matched_check_texts.join(", ")
            ));
        }
        if !site.matched_not_found_texts.is_empty() {
            line.push_str(&format!(
                " (matched not_found_text: {})",
                site.matched_not_found_texts.join(", ")
            ));
        }
    }

    style(site.status, &line).to_string()
}

fn glyph(status: ProbeStatus) -> &'static str {
    match status {
        ProbeStatus::Found => "↳",
        ProbeStatus::Possible => "?",
        ProbeStatus::NotFound => "✗",
        ProbeStatus::Skipped => "·",
        ProbeStatus::Timeout | ProbeStatus::Error => "!",
    }
}

fn style(status: ProbeStatus, line: &str) -> ColoredString {
    match status {
        ProbeStatus::Found => line.green(),
        ProbeStatus::Possible => line.yellow(),
        ProbeStatus::NotFound => line.red(),
        ProbeStatus::Skipped => line.dimmed(),
        ProbeStatus::Timeout | ProbeStatus::Error => line.red().bold(),
    }
}
