//! Event creation form model, persisted as a draft like the callout form.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use serde::{Deserialize, Serialize};

use super::callout::non_empty;
use crate::net::types::CreateEventRequest;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventForm {
    pub title: String,
    pub track_id: String,
    /// `YYYY-MM-DD` from a date input.
    pub date: String,
    /// `HH:MM` from a time input.
    pub start_time: String,
    pub description: String,
    /// Raw text of the entrant cap; blank means uncapped.
    pub max_entrants: String,
}

impl EventForm {
    /// Check required fields and build the request payload.
    ///
    /// # Errors
    ///
    /// Returns the inline message for the first invalid field.
    pub fn validate(&self) -> Result<CreateEventRequest, &'static str> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Enter an event title.");
        }
        let track_id = self.track_id.trim();
        if track_id.is_empty() {
            return Err("Select a track.");
        }
        let date = self.date.trim();
        if !is_iso_date(date) {
            return Err("Pick an event date.");
        }
        let max_entrants = match non_empty(&self.max_entrants) {
            None => None,
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => Some(n),
                _ => return Err("Max entrants must be a positive number."),
            },
        };
        Ok(CreateEventRequest {
            title: title.to_owned(),
            track_id: track_id.to_owned(),
            date: date.to_owned(),
            start_time: non_empty(&self.start_time),
            description: non_empty(&self.description),
            max_entrants,
        })
    }
}

/// Shape check for the `YYYY-MM-DD` value a date input produces.
fn is_iso_date(value: &str) -> bool {
    let parts: Vec<&str> = value.split('-').collect();
    let [year, month, day] = *parts.as_slice() else {
        return false;
    };
    let digits = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(year, 4) || !digits(month, 2) || !digits(day, 2) {
        return false;
    }
    matches!(month.parse::<u8>(), Ok(1..=12)) && matches!(day.parse::<u8>(), Ok(1..=31))
}
