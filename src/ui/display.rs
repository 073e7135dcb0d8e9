//! Terminal output for command results.
//!
//! Results go to stdout; diagnostics go through `tracing` to stderr, so
//! `drupass hash` can be piped straight into a database import.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use console::style;
use drupass::audit::Report;
use drupass::types::HashFormat;

/// Prints a freshly generated stored hash, alone on its line.
pub fn show_hash(stored: &str) {
    println!("{stored}");
}

pub fn show_verification(matched: bool) {
    if matched {
        println!("{} {}", style("✓").green(), style("Password matches").bold());
    } else {
        println!("{} {}", style("✗").red(), style("Password does not match").bold());
    }
}

pub fn show_rehash(stale: bool, format: HashFormat, count_log2: u32) {
    if stale {
        println!("{} {} ({format}, target 2^{count_log2})", style("!").yellow(), style("Hash needs rehashing").bold());
    } else {
        println!("{} {} (2^{count_log2})", style("✓").green(), style("Hash is current").bold());
    }
}

/// Prints one row per stored hash and a per-format summary.
pub fn show_report(report: &Report) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_content_arrangement(ContentArrangement::Dynamic).set_header(vec!["Line", "Format", "Count", "Rehash"]);

    for entry in &report.entries {
        let count = entry.count_log2.map_or_else(|| "-".to_owned(), |count| format!("2^{count}"));
        let rehash = if entry.needs_rehash { "yes" } else { "no" };
        table.add_row(vec![Cell::new(entry.line), Cell::new(entry.format), Cell::new(count), Cell::new(rehash)]);
    }

    println!("{table}");
    println!();

    let counts = report.counts();
    for format in HashFormat::ALL {
        println!("  {:>10}  {}", style(format).bold(), counts.get(format).copied().unwrap_or_default());
    }

    println!();
    println!("{} {} of {} stored hashes need rehashing", style("•").cyan(), style(report.stale()).bold(), report.entries.len());
}

/// Prints the application banner.
pub fn print_banner() {
    let banner = r"
     __
 ___/ /_____ _____  ___ ____ ___
/ _  / __/ // / _ \/ _ `(_-<(_-<
\_,_/_/  \_,_/ .__/\_,_/___/___/
            /_/
";

    println!("{}", style(banner).green().bold());
}
