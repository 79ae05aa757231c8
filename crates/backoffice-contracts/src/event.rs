// Event DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An event as stored by the backend.
///
/// `image` is either a plain URL or an inline `data:` URL; the client caps
/// data URLs at 3MB decoded before upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: i64,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
    pub category_id: i64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub min_capacity: u32,
    #[serde(default)]
    pub max_capacity: u32,
    /// Users assigned to this event.
    #[serde(default)]
    pub user_ids: Vec<i64>,
}

/// Payload for `add_event` and `update_event`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
    pub category_id: i64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub min_capacity: u32,
    #[serde(default)]
    pub max_capacity: u32,
    #[serde(default)]
    pub user_ids: Vec<i64>,
}

impl From<&Event> for EventPayload {
    fn from(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            start_date: event.start_date,
            end_date: event.end_date,
            location: event.location.clone(),
            category_id: event.category_id,
            image: event.image.clone(),
            price: event.price,
            min_capacity: event.min_capacity,
            max_capacity: event.max_capacity,
            user_ids: event.user_ids.clone(),
        }
    }
}
