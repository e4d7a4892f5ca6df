// Descriptive aggregates over the cleaned dataset.
//
// All functions are pure: they take `&[CleanRecord]` and return counts.
// Ranking ties are broken by first appearance in the data, so results are
// deterministic for a given input order.
use crate::types::CleanRecord;
use chrono::{Datelike, NaiveDate, Timelike};
use std::collections::{BTreeMap, HashMap};

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Count occurrences of each key, descending by count, ties broken by
/// first appearance.
fn count_ranked<I>(keys: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (seen_at, key) in keys.into_iter().enumerate() {
        let e = counts.entry(key).or_insert((0, seen_at));
        e.0 += 1;
    }
    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(k, (count, first))| (k, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.2.cmp(&b.2)));
    ranked.into_iter().map(|(k, count, _)| (k, count)).collect()
}

/// Orders per customer, most active first.
pub fn customer_order_counts(data: &[CleanRecord]) -> Vec<(String, usize)> {
    count_ranked(data.iter().map(|r| r.customer_id.clone()))
}

/// All customers tied at the maximum order count. Empty only when the
/// dataset is empty.
pub fn top_customers(counts: &[(String, usize)]) -> Vec<(String, usize)> {
    let Some(max) = counts.first().map(|(_, c)| *c) else {
        return Vec::new();
    };
    counts
        .iter()
        .take_while(|(_, c)| *c == max)
        .cloned()
        .collect()
}

/// Order counts for each hour of day, index 0..=23.
pub fn hourly_distribution(data: &[CleanRecord]) -> [usize; 24] {
    let mut hours = [0usize; 24];
    for r in data {
        hours[r.placed_at.hour() as usize] += 1;
    }
    hours
}

/// The hour with the most orders; lowest hour wins a tie. `None` when the
/// dataset is empty.
pub fn peak_hour(hours: &[usize; 24]) -> Option<u32> {
    let max = *hours.iter().max()?;
    if max == 0 {
        return None;
    }
    hours.iter().position(|c| *c == max).map(|h| h as u32)
}

/// Order counts for each weekday, index 0 = Monday .. 6 = Sunday.
pub fn weekday_distribution(data: &[CleanRecord]) -> [usize; 7] {
    let mut days = [0usize; 7];
    for r in data {
        days[r.placed_at.weekday().num_days_from_monday() as usize] += 1;
    }
    days
}

/// The weekday with the most orders; earliest (Monday-first) wins a tie.
pub fn peak_weekday(days: &[usize; 7]) -> Option<&'static str> {
    let max = *days.iter().max()?;
    if max == 0 {
        return None;
    }
    days.iter()
        .position(|c| *c == max)
        .map(|i| WEEKDAY_NAMES[i])
}

/// Item tokens from one order's `Items in order` value.
///
/// The export delimits items with commas and prefixes quantities as
/// `N x Name`; the quantity is discarded here. The `Unknown` fill value
/// contributes no tokens.
pub fn item_tokens(items: &str) -> Vec<String> {
    if items.trim() == "Unknown" {
        return Vec::new();
    }
    items
        .split(',')
        .filter_map(|entry| {
            let entry = entry.trim();
            let name = match entry.split_once(" x ") {
                Some((_, name)) => name.trim(),
                None => entry,
            };
            if name.is_empty() {
                None
            } else {
                Some(name.to_string())
            }
        })
        .collect()
}

/// Global item popularity, most ordered first, ties by first-seen token.
pub fn item_popularity(data: &[CleanRecord]) -> Vec<(String, usize)> {
    count_ranked(data.iter().flat_map(|r| item_tokens(&r.items)))
}

/// Orders per calendar date, chronological. Days with no orders are
/// simply absent.
pub fn daily_volume(data: &[CleanRecord]) -> Vec<(NaiveDate, usize)> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for r in data {
        *days.entry(r.placed_at.date()).or_insert(0) += 1;
    }
    days.into_iter().collect()
}

/// Orders per payment method, most used first. Records with no payment
/// value are skipped; the caller decides whether the column exists at all.
pub fn payment_split(data: &[CleanRecord]) -> Vec<(String, usize)> {
    count_ranked(
        data.iter()
            .filter_map(|r| r.payment_method.clone()),
    )
}

/// Every aggregate the report and charts need, computed in one pass over
/// the cleaned dataset.
#[derive(Debug)]
pub struct Analysis {
    pub customer_counts: Vec<(String, usize)>,
    pub hours: [usize; 24],
    pub weekdays: [usize; 7],
    pub items: Vec<(String, usize)>,
    pub daily: Vec<(NaiveDate, usize)>,
    pub payments: Vec<(String, usize)>,
}

pub fn analyze(data: &[CleanRecord]) -> Analysis {
    Analysis {
        customer_counts: customer_order_counts(data),
        hours: hourly_distribution(data),
        weekdays: weekday_distribution(data),
        items: item_popularity(data),
        daily: daily_volume(data),
        payments: payment_split(data),
    }
}
