// Entry point and high-level pipeline flow.
//
// The pipeline runs top to bottom in one shot:
// - load the order-history CSV,
// - clean it (required fields, dedup, timestamps, status filter),
// - aggregate customer / time / item counts,
// - render charts and print the textual insight report.
//
// The only fatal error is a missing or unreadable input file; everything
// downstream degrades to skipped rows or skipped charts.
mod aggregate;
mod charts;
mod cleaner;
mod config;
mod loader;
mod output;
mod report;
mod types;
mod util;

use config::Config;
use std::error::Error;
use std::fs;
use util::format_int;

fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    println!("--- Food Delivery Customer Behavior Analysis ---\n");

    let table = loader::load(&config.input_path)?;
    println!(
        "Loaded {} rows from {}.",
        format_int((table.rows.len() + table.deserialize_errors) as i64),
        config.input_path.display()
    );

    let (data, clean_report) = cleaner::clean(&table, config);
    println!(
        "Cleaned dataset: {} completed orders kept.",
        format_int(clean_report.kept as i64)
    );
    let dropped = clean_report.deserialize_errors
        + clean_report.missing_required
        + clean_report.duplicate_orders
        + clean_report.bad_timestamps;
    if dropped > 0 {
        println!(
            "Dropped {} rows ({} unreadable, {} missing required fields, \
             {} duplicate order IDs, {} bad timestamps).",
            format_int(dropped as i64),
            format_int(clean_report.deserialize_errors as i64),
            format_int(clean_report.missing_required as i64),
            format_int(clean_report.duplicate_orders as i64),
            format_int(clean_report.bad_timestamps as i64)
        );
    }
    if clean_report.filtered_status > 0 {
        println!(
            "Filtered out {} orders with non-completed statuses.",
            format_int(clean_report.filtered_status as i64)
        );
    }
    println!();

    if data.is_empty() {
        println!("No completed orders after cleaning; nothing to analyze.");
        return Ok(());
    }

    let analysis = aggregate::analyze(&data);

    fs::create_dir_all(&config.output_dir)?;
    if let Err(e) = charts::render_top_items(&analysis.items, config.top_n_items, &config.output_dir)
    {
        eprintln!("Chart error ({}): {}", charts::TOP_ITEMS_FILE, e);
    } else {
        println!("Saved chart: {}", config.output_dir.join(charts::TOP_ITEMS_FILE).display());
    }
    if let Err(e) = charts::render_daily_trend(&analysis.daily, &config.output_dir) {
        eprintln!("Chart error ({}): {}", charts::DAILY_ORDERS_FILE, e);
    } else {
        println!(
            "Saved chart: {}",
            config.output_dir.join(charts::DAILY_ORDERS_FILE).display()
        );
    }
    if table.has_payment_method && !analysis.payments.is_empty() {
        if let Err(e) = charts::render_payment_split(&analysis.payments, &config.output_dir) {
            eprintln!("Chart error ({}): {}", charts::PAYMENT_METHODS_FILE, e);
        } else {
            println!(
                "Saved chart: {}",
                config.output_dir.join(charts::PAYMENT_METHODS_FILE).display()
            );
        }
    }
    println!();

    report::print_insights(&analysis, config, table.has_payment_method);

    let summary = report::build_summary(&data, &analysis);
    let summary_path = config.output_dir.join("summary.json");
    if let Err(e) = output::write_json(&summary_path, &summary) {
        eprintln!("Write error ({}): {}", summary_path.display(), e);
    } else {
        println!("Summary stats written to {}.", summary_path.display());
    }

    Ok(())
}

fn main() {
    let config = Config::from_args(std::env::args().skip(1));
    if let Err(e) = run(&config) {
        eprintln!("Failed to analyze {}: {}", config.input_path.display(), e);
        std::process::exit(1);
    }
}
