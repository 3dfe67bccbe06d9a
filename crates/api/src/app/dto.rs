use chrono::NaiveDate;
use serde::Deserialize;

use larder_inventory::{Category, Item, DEFAULT_ALERT_THRESHOLD};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Image payload carried inline on Add: raw bytes, base64-encoded.
#[derive(Debug, Deserialize)]
pub struct ImageUpload {
    pub filename: String,
    pub data: String,
}

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub name: String,
    pub quantity: u32,
    pub category: Category,
    pub expiry: Option<NaiveDate>,
    #[serde(default)]
    pub note: String,
    pub image: Option<ImageUpload>,
    #[serde(default = "default_alert_threshold")]
    pub alert_threshold: u32,
}

fn default_alert_threshold() -> u32 {
    DEFAULT_ALERT_THRESHOLD
}

#[derive(Debug, Deserialize)]
pub struct IncreaseRequest {
    pub amount: u32,
}

#[derive(Debug, Deserialize)]
pub struct DecreaseRequest {
    pub amount: u32,
    /// Remove the row when the quantity reaches exactly zero. Defaults to
    /// on, matching the shell's checkbox.
    #[serde(default = "default_auto_delete")]
    pub auto_delete: bool,
}

fn default_auto_delete() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub name: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    #[serde(default)]
    pub confirm: bool,
}

// -------------------------
// Response mapping
// -------------------------

pub fn item_to_json(item: &Item) -> serde_json::Value {
    serde_json::json!({
        "id": item.id.to_string(),
        "name": item.name,
        "quantity": item.quantity,
        "category": item.category.label(),
        "expiry": item.expiry.map(|d| d.format("%Y-%m-%d").to_string()),
        "note": item.note,
        "image_path": item.image_path,
        "alert_threshold": item.alert_threshold,
    })
}

pub fn items_to_json<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<serde_json::Value> {
    items.into_iter().map(item_to_json).collect()
}
