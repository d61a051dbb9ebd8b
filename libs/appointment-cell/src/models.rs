use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_database::DatabaseError;

/// The two `appointments.status` values the sweep moves between.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppointmentStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::InProgress => "In Progress",
            AppointmentStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentIdRow {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AutoCompleteResponse {
    pub updated: usize,
}

#[derive(Debug, Error)]
pub enum AppointmentError {
    #[error("Failed to load stale appointments: {0}")]
    Fetch(DatabaseError),

    #[error("Failed to complete appointments: {0}")]
    Update(DatabaseError),
}
