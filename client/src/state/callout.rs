//! Callout creation form model.
//!
//! The whole struct is the draft persisted under the callout slot, so every
//! field is plain text bound to an input and unknown/missing fields in an old
//! draft fall back to defaults.

#[cfg(test)]
#[path = "callout_test.rs"]
mod callout_test;

use serde::{Deserialize, Serialize};

use crate::net::types::CreateCalloutRequest;

/// Race formats offered in the callout form.
pub const RACE_TYPES: [(&str, &str); 4] = [
    ("drag", "Drag (1/4 mile)"),
    ("eighth", "Drag (1/8 mile)"),
    ("roll", "Roll race"),
    ("circuit", "Circuit"),
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalloutForm {
    pub title: String,
    pub track_id: String,
    /// Username of the racer being called out.
    pub opponent: String,
    pub vehicle: String,
    pub race_type: String,
    pub scheduled_date: String,
    pub notes: String,
}

impl Default for CalloutForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            track_id: String::new(),
            opponent: String::new(),
            vehicle: String::new(),
            race_type: RACE_TYPES[0].0.to_owned(),
            scheduled_date: String::new(),
            notes: String::new(),
        }
    }
}

impl CalloutForm {
    /// Check required fields and build the request payload.
    ///
    /// # Errors
    ///
    /// Returns the inline message for the first missing field.
    pub fn validate(&self) -> Result<CreateCalloutRequest, &'static str> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Enter a callout title.");
        }
        let track_id = self.track_id.trim();
        if track_id.is_empty() {
            return Err("Select a track.");
        }
        let opponent = self.opponent.trim().trim_start_matches('@');
        if opponent.is_empty() {
            return Err("Choose an opponent.");
        }
        let vehicle = self.vehicle.trim();
        if vehicle.is_empty() {
            return Err("Enter your vehicle.");
        }
        let race_type = self.race_type.trim();
        if !RACE_TYPES.iter().any(|(value, _)| *value == race_type) {
            return Err("Select a race type.");
        }
        Ok(CreateCalloutRequest {
            title: title.to_owned(),
            track_id: track_id.to_owned(),
            opponent: opponent.to_owned(),
            vehicle: vehicle.to_owned(),
            race_type: race_type.to_owned(),
            scheduled_date: non_empty(&self.scheduled_date),
            notes: non_empty(&self.notes),
        })
    }
}

pub(crate) fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}
