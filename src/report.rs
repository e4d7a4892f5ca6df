// Textual insight report printed after aggregation.
use crate::aggregate::{peak_hour, peak_weekday, top_customers, Analysis, WEEKDAY_NAMES};
use crate::config::Config;
use crate::output::print_table;
use crate::types::{CleanRecord, CustomerRow, ItemRow, SummaryStats};
use crate::util::{average, format_int, format_number};
use std::collections::HashSet;

/// Print the insight summary: top customer(s), peak times, top items and
/// the payment-method section (or its placeholder when the column is
/// missing from the input).
pub fn print_insights(analysis: &Analysis, config: &Config, has_payment_method: bool) {
    let top = top_customers(&analysis.customer_counts);
    match top.as_slice() {
        [] => println!("No completed orders to report on."),
        [(customer, orders)] => println!(
            "Top customer: {} with {} orders.",
            customer,
            format_int(*orders as i64)
        ),
        many => {
            let names: Vec<&str> = many.iter().map(|(c, _)| c.as_str()).collect();
            println!(
                "Top customers (tied at {} orders each): {}",
                format_int(many[0].1 as i64),
                names.join(", ")
            );
        }
    }

    println!("\nTop {} Customers by Number of Orders:", config.top_n_customers);
    let customer_rows: Vec<CustomerRow> = analysis
        .customer_counts
        .iter()
        .take(config.top_n_customers)
        .enumerate()
        .map(|(i, (customer_id, orders))| CustomerRow {
            rank: i + 1,
            customer_id: customer_id.clone(),
            orders: *orders,
        })
        .collect();
    print_table(&customer_rows, config.top_n_customers);

    match peak_hour(&analysis.hours) {
        Some(hour) => println!(
            "Peak ordering hour: {:02}:00 ({} orders).",
            hour,
            format_int(analysis.hours[hour as usize] as i64)
        ),
        None => println!("Peak ordering hour: n/a (no orders)."),
    }
    match peak_weekday(&analysis.weekdays) {
        Some(day) => {
            let idx = WEEKDAY_NAMES.iter().position(|d| *d == day).unwrap_or(0);
            println!(
                "Peak ordering day: {} ({} orders).",
                day,
                format_int(analysis.weekdays[idx] as i64)
            );
        }
        None => println!("Peak ordering day: n/a (no orders)."),
    }
    if let Some(slowest) = slowest_weekday(&analysis.weekdays) {
        println!("Slowest ordering day: {}.", slowest);
    }
    if !analysis.daily.is_empty() {
        let per_day: Vec<f64> = analysis.daily.iter().map(|(_, c)| *c as f64).collect();
        println!(
            "Average daily volume: {} orders over {} active days.",
            format_number(average(&per_day), 2),
            format_int(analysis.daily.len() as i64)
        );
    }

    println!("\nTop {} Most Ordered Items:", config.top_n_items);
    let item_rows: Vec<ItemRow> = analysis
        .items
        .iter()
        .take(config.top_n_items)
        .enumerate()
        .map(|(i, (item, count))| ItemRow {
            rank: i + 1,
            item: item.clone(),
            times_ordered: *count,
        })
        .collect();
    print_table(&item_rows, config.top_n_items);

    if has_payment_method {
        println!("Payment method split:");
        for (method, count) in &analysis.payments {
            println!("- {}: {} orders", method, format_int(*count as i64));
        }
        println!();
    } else {
        println!(
            "Note: the dataset has no Payment Method column; the payment \
             split chart was skipped."
        );
        println!();
    }
}

/// Weekday with the fewest orders among days that had any. `None` when no
/// weekday saw an order.
fn slowest_weekday(days: &[usize; 7]) -> Option<&'static str> {
    let min = *days.iter().filter(|c| **c > 0).min()?;
    days.iter()
        .position(|c| *c == min)
        .map(|i| WEEKDAY_NAMES[i])
}

pub fn build_summary(data: &[CleanRecord], analysis: &Analysis) -> SummaryStats {
    let distinct_customers: HashSet<&str> =
        data.iter().map(|r| r.customer_id.as_str()).collect();
    SummaryStats {
        total_orders: data.len(),
        distinct_customers: distinct_customers.len(),
        distinct_items: analysis.items.len(),
        peak_hour: peak_hour(&analysis.hours),
        peak_weekday: peak_weekday(&analysis.weekdays).map(str::to_string),
        first_order_date: analysis.daily.first().map(|(d, _)| d.to_string()),
        last_order_date: analysis.daily.last().map(|(d, _)| d.to_string()),
    }
}
