use crate::config::Config;
use crate::loader::RawTable;
use crate::types::{CleanRecord, RawRow};
use crate::util::{nonempty, parse_timestamp_safe};
use std::collections::HashSet;

/// Counters describing what the cleaner did to the raw table. Rows are
/// never errors here; bad rows are excluded and show up in these counts.
#[derive(Debug, Clone, Default)]
pub struct CleanReport {
    pub total_rows: usize,
    pub deserialize_errors: usize,
    pub missing_required: usize,
    pub duplicate_orders: usize,
    pub bad_timestamps: usize,
    pub filtered_status: usize,
    pub kept: usize,
}

/// Clean the raw table into the validated dataset.
///
/// - Rows missing Customer ID, Order ID, or Order Placed At are dropped.
/// - The first occurrence per Order ID wins; later duplicates are dropped.
/// - `Order Placed At` must parse; rows that fail are dropped.
/// - A missing `Items in order` value is filled with `"Unknown"`.
/// - Only rows whose status is in the configured completed set survive.
///
/// Cleaning is idempotent: feeding the output back through drops nothing.
pub fn clean(table: &RawTable, config: &Config) -> (Vec<CleanRecord>, CleanReport) {
    let mut report = CleanReport {
        total_rows: table.rows.len() + table.deserialize_errors,
        deserialize_errors: table.deserialize_errors,
        ..CleanReport::default()
    };

    let mut seen_orders: HashSet<String> = HashSet::new();
    let mut cleaned: Vec<CleanRecord> = Vec::new();
    for row in &table.rows {
        if let Some(rec) = clean_row(row, config, &mut seen_orders, &mut report) {
            cleaned.push(rec);
        }
    }
    report.kept = cleaned.len();
    (cleaned, report)
}

fn clean_row(
    row: &RawRow,
    config: &Config,
    seen_orders: &mut HashSet<String>,
    report: &mut CleanReport,
) -> Option<CleanRecord> {
    let customer_id = nonempty(row.customer_id.as_deref());
    let order_id = nonempty(row.order_id.as_deref());
    let placed_at_raw = nonempty(row.placed_at.as_deref());
    let (Some(customer_id), Some(order_id), Some(placed_at_raw)) =
        (customer_id, order_id, placed_at_raw)
    else {
        report.missing_required += 1;
        return None;
    };

    // Keep-first dedup: check before timestamp parsing so a later duplicate
    // of a valid order is counted as a duplicate, not a parse failure.
    if !seen_orders.insert(order_id.clone()) {
        report.duplicate_orders += 1;
        return None;
    }

    let Some(placed_at) = parse_timestamp_safe(Some(&placed_at_raw)) else {
        report.bad_timestamps += 1;
        return None;
    };

    let status = nonempty(row.status.as_deref()).unwrap_or_default();
    if !config.is_completed(&status) {
        report.filtered_status += 1;
        return None;
    }

    let items = nonempty(row.items.as_deref()).unwrap_or_else(|| "Unknown".to_string());

    Some(CleanRecord {
        customer_id,
        order_id,
        placed_at,
        status,
        items,
        payment_method: nonempty(row.payment_method.as_deref()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::RawTable;

    fn raw(
        customer: Option<&str>,
        order: Option<&str>,
        placed: Option<&str>,
        status: Option<&str>,
        items: Option<&str>,
    ) -> RawRow {
        RawRow {
            customer_id: customer.map(str::to_string),
            order_id: order.map(str::to_string),
            placed_at: placed.map(str::to_string),
            status: status.map(str::to_string),
            items: items.map(str::to_string),
            payment_method: None,
        }
    }

    fn table(rows: Vec<RawRow>) -> RawTable {
        RawTable {
            rows,
            has_payment_method: false,
            deserialize_errors: 0,
        }
    }

    const TS: &str = "07:15 PM, September 10 2024";

    #[test]
    fn drops_rows_missing_required_fields() {
        let t = table(vec![
            raw(None, Some("1"), Some(TS), Some("Delivered"), None),
            raw(Some("C1"), None, Some(TS), Some("Delivered"), None),
            raw(Some("C1"), Some("2"), None, Some("Delivered"), None),
            raw(Some("C1"), Some("3"), Some(TS), Some("Delivered"), None),
        ]);
        let (cleaned, report) = clean(&t, &Config::default());
        assert_eq!(cleaned.len(), 1);
        assert_eq!(report.missing_required, 3);
        assert_eq!(report.kept, 1);
    }

    #[test]
    fn keeps_first_occurrence_per_order_id() {
        let t = table(vec![
            raw(Some("C1"), Some("1001"), Some(TS), Some("Delivered"), Some("1 x Pizza")),
            raw(Some("C2"), Some("1001"), Some(TS), Some("Delivered"), Some("1 x Coke")),
        ]);
        let (cleaned, report) = clean(&t, &Config::default());
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].order_id, "1001");
        assert_eq!(cleaned[0].customer_id, "C1");
        assert_eq!(report.duplicate_orders, 1);
    }

    #[test]
    fn order_ids_are_unique_after_cleaning() {
        let t = table(vec![
            raw(Some("C1"), Some("1"), Some(TS), Some("Delivered"), None),
            raw(Some("C1"), Some("2"), Some(TS), Some("Delivered"), None),
            raw(Some("C1"), Some("1"), Some(TS), Some("Delivered"), None),
            raw(Some("C1"), Some("2"), Some(TS), Some("Delivered"), None),
        ]);
        let (cleaned, _) = clean(&t, &Config::default());
        let ids: HashSet<&str> = cleaned.iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(ids.len(), cleaned.len());
    }

    #[test]
    fn drops_unparsable_timestamps() {
        let t = table(vec![
            raw(Some("C1"), Some("1"), Some("not a time"), Some("Delivered"), None),
            raw(Some("C1"), Some("2"), Some(TS), Some("Delivered"), None),
        ]);
        let (cleaned, report) = clean(&t, &Config::default());
        assert_eq!(cleaned.len(), 1);
        assert_eq!(report.bad_timestamps, 1);
    }

    #[test]
    fn filters_to_completed_statuses() {
        let t = table(vec![
            raw(Some("C1"), Some("1"), Some(TS), Some("Delivered"), None),
            raw(Some("C1"), Some("2"), Some(TS), Some("Cancelled"), None),
            raw(Some("C1"), Some("3"), Some(TS), Some("Pending"), None),
            raw(Some("C1"), Some("4"), Some(TS), None, None),
        ]);
        let (cleaned, report) = clean(&t, &Config::default());
        assert_eq!(cleaned.len(), 1);
        assert_eq!(report.filtered_status, 3);
        let cfg = Config::default();
        assert!(cleaned.iter().all(|r| cfg.is_completed(&r.status)));
    }

    #[test]
    fn fills_missing_items_with_unknown() {
        let t = table(vec![raw(
            Some("C1"),
            Some("1"),
            Some(TS),
            Some("Delivered"),
            None,
        )]);
        let (cleaned, _) = clean(&t, &Config::default());
        assert_eq!(cleaned[0].items, "Unknown");
    }

    #[test]
    fn cleaning_is_idempotent() {
        let t = table(vec![
            raw(Some("C1"), Some("1"), Some(TS), Some("Delivered"), Some("1 x Pizza")),
            raw(Some("C1"), Some("1"), Some(TS), Some("Delivered"), Some("1 x Pizza")),
            raw(Some("C2"), Some("2"), Some("bad"), Some("Delivered"), None),
            raw(Some("C3"), Some("3"), Some(TS), Some("Cancelled"), None),
            raw(Some("C4"), Some("4"), Some(TS), Some("Delivered"), None),
        ]);
        let cfg = Config::default();
        let (first, _) = clean(&t, &cfg);

        // Feed the cleaned records back through as raw rows.
        let reraw: Vec<RawRow> = first
            .iter()
            .map(|r| RawRow {
                customer_id: Some(r.customer_id.clone()),
                order_id: Some(r.order_id.clone()),
                placed_at: Some(r.placed_at.format("%I:%M %p, %B %d %Y").to_string()),
                status: Some(r.status.clone()),
                items: Some(r.items.clone()),
                payment_method: r.payment_method.clone(),
            })
            .collect();
        let (second, report) = clean(&table(reraw), &cfg);
        assert_eq!(second.len(), first.len());
        assert_eq!(report.missing_required, 0);
        assert_eq!(report.duplicate_orders, 0);
        assert_eq!(report.bad_timestamps, 0);
        assert_eq!(report.filtered_status, 0);
    }

    #[test]
    fn cleaned_timestamps_stay_within_raw_range() {
        let t = table(vec![
            raw(Some("C1"), Some("1"), Some("09:00 AM, September 01 2024"), Some("Delivered"), None),
            raw(Some("C2"), Some("2"), Some("10:30 PM, September 15 2024"), Some("Delivered"), None),
            raw(Some("C3"), Some("3"), Some("01:00 PM, September 07 2024"), Some("Delivered"), None),
        ]);
        let (cleaned, _) = clean(&t, &Config::default());
        let min = parse_timestamp_safe(Some("09:00 AM, September 01 2024")).unwrap();
        let max = parse_timestamp_safe(Some("10:30 PM, September 15 2024")).unwrap();
        assert!(cleaned.iter().all(|r| r.placed_at >= min && r.placed_at <= max));
    }
}
