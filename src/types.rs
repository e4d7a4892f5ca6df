use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// One row of the order-history CSV, exactly as it appears on disk.
///
/// Every field is optional; the cleaner decides which absences drop the
/// row. `Payment Method` is missing from most exports, so the loader also
/// checks the header row to tell "column absent" apart from "value empty".
#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Customer ID", default)]
    pub customer_id: Option<String>,
    #[serde(rename = "Order ID", default)]
    pub order_id: Option<String>,
    #[serde(rename = "Order Placed At", default)]
    pub placed_at: Option<String>,
    #[serde(rename = "Order Status", default)]
    pub status: Option<String>,
    #[serde(rename = "Items in order", default)]
    pub items: Option<String>,
    #[serde(rename = "Payment Method", default)]
    pub payment_method: Option<String>,
}

/// A validated order record. After cleaning, `order_id` is unique across
/// the dataset and `status` is a member of the configured completed set.
#[derive(Debug, Clone)]
pub struct CleanRecord {
    pub customer_id: String,
    pub order_id: String,
    pub placed_at: NaiveDateTime,
    pub status: String,
    pub items: String,
    pub payment_method: Option<String>,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct CustomerRow {
    #[serde(rename = "Rank")]
    #[tabled(rename = "Rank")]
    pub rank: usize,
    #[serde(rename = "CustomerID")]
    #[tabled(rename = "CustomerID")]
    pub customer_id: String,
    #[serde(rename = "Orders")]
    #[tabled(rename = "Orders")]
    pub orders: usize,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct ItemRow {
    #[serde(rename = "Rank")]
    #[tabled(rename = "Rank")]
    pub rank: usize,
    #[serde(rename = "Item")]
    #[tabled(rename = "Item")]
    pub item: String,
    #[serde(rename = "TimesOrdered")]
    #[tabled(rename = "TimesOrdered")]
    pub times_ordered: usize,
}

#[derive(Debug, Serialize)]
pub struct SummaryStats {
    pub total_orders: usize,
    pub distinct_customers: usize,
    pub distinct_items: usize,
    pub peak_hour: Option<u32>,
    pub peak_weekday: Option<String>,
    pub first_order_date: Option<String>,
    pub last_order_date: Option<String>,
}
