//! Project entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A monitoring project: a named crop observed over a date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub crop_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Build a project from already validated form values
    pub fn new(
        name: impl Into<String>,
        crop_name: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            crop_name: crop_name.into(),
            start_date,
            end_date,
            created_at,
        }
    }

    /// Observation window length in whole days
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
