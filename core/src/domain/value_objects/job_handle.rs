//! Handle for a submitted imagery request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobHandle {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

impl JobHandle {
    pub fn new(submitted_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at,
        }
    }
}
