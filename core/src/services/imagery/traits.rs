//! Trait for the imagery provider the map screen calls through

use async_trait::async_trait;
use cams_shared::Coordinate;
use chrono::{DateTime, Utc};

use crate::domain::value_objects::JobHandle;
use crate::errors::ImageryError;

#[async_trait]
pub trait ImageryServiceTrait: Send + Sync {
    /// Request imagery covering `area` between `start_date` and `end_date`
    async fn request_satellite_imagery(
        &self,
        area: &[Coordinate],
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<JobHandle, ImageryError>;
}
