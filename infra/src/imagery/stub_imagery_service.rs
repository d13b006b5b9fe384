//! In-memory imagery job intake

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use cams_core::{Clock, ImageryError, ImageryServiceTrait, JobHandle};
use cams_shared::Coordinate;

use crate::config::StubImageryConfig;

/// A request accepted by the service
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedJob {
    pub handle: JobHandle,
    pub area: Vec<Coordinate>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Imagery service that validates and records requests without fetching
/// anything
pub struct StubImageryService {
    jobs: RwLock<Vec<SubmittedJob>>,
    simulate_failure: AtomicBool,
    config: StubImageryConfig,
    clock: Arc<dyn Clock>,
}

impl StubImageryService {
    pub fn new(config: StubImageryConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            jobs: RwLock::new(Vec::new()),
            simulate_failure: AtomicBool::new(false),
            config,
            clock,
        }
    }

    pub fn config(&self) -> &StubImageryConfig {
        &self.config
    }

    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    pub async fn jobs(&self) -> Vec<SubmittedJob> {
        self.jobs.read().await.clone()
    }

    fn check_request(
        &self,
        area: &[Coordinate],
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<(), ImageryError> {
        if self
            .config
            .api_key
            .as_deref()
            .map_or(true, |key| key.trim().is_empty())
        {
            return Err(ImageryError::MissingApiKey);
        }
        if area.is_empty() {
            return Err(ImageryError::EmptyArea);
        }
        if area.len() < self.config.min_area_points {
            return Err(ImageryError::AreaTooSmall { points: area.len() });
        }
        if start_date >= end_date {
            return Err(ImageryError::InvalidDateRange {
                message: format!(
                    "start {} is not before end {}",
                    start_date.date_naive(),
                    end_date.date_naive()
                ),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ImageryServiceTrait for StubImageryService {
    async fn request_satellite_imagery(
        &self,
        area: &[Coordinate],
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<JobHandle, ImageryError> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            return Err(ImageryError::ServiceUnavailable {
                message: "Simulated imagery provider outage".to_string(),
            });
        }
        self.check_request(area, start_date, end_date)?;

        let mut jobs = self.jobs.write().await;
        if let Some(max_jobs) = self.config.max_jobs {
            if jobs.len() >= max_jobs {
                tracing::warn!(max_jobs, event = "imagery_quota_exceeded", "Imagery quota reached");
                return Err(ImageryError::QuotaExceeded);
            }
        }

        let handle = JobHandle::new(self.clock.now());
        jobs.push(SubmittedJob {
            handle,
            area: area.to_vec(),
            start_date,
            end_date,
        });

        tracing::info!(
            job_id = %handle.id,
            points = area.len(),
            days = (end_date - start_date).num_days(),
            event = "imagery_job_accepted",
            "Imagery job accepted"
        );
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cams_core::FixedClock;
    use chrono::TimeZone;

    fn area(n: usize) -> Vec<Coordinate> {
        (0..n)
            .map(|i| Coordinate::new(37.77 + i as f64 * 0.001, -122.42))
            .collect()
    }

    fn dates() -> (DateTime<Utc>, DateTime<Utc>) {
        (
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        )
    }

    fn service(config: StubImageryConfig) -> StubImageryService {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        StubImageryService::new(config, Arc::new(FixedClock::new(now)))
    }

    #[tokio::test]
    async fn test_accepts_and_records_job() {
        let service = service(StubImageryConfig::default());
        let (start, end) = dates();

        let handle = service
            .request_satellite_imagery(&area(4), start, end)
            .await
            .unwrap();
        assert_eq!(
            handle.submitted_at,
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
        );

        let jobs = service.jobs().await;
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].handle, handle);
        assert_eq!(jobs[0].area.len(), 4);
    }

    #[tokio::test]
    async fn test_rejects_bad_requests() {
        let service = service(StubImageryConfig::default());
        let (start, end) = dates();

        assert_eq!(
            service.request_satellite_imagery(&[], start, end).await,
            Err(ImageryError::EmptyArea)
        );
        assert_eq!(
            service.request_satellite_imagery(&area(2), start, end).await,
            Err(ImageryError::AreaTooSmall { points: 2 })
        );
        assert!(matches!(
            service.request_satellite_imagery(&area(3), end, start).await,
            Err(ImageryError::InvalidDateRange { .. })
        ));
        assert!(service.jobs().await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_key() {
        let service = service(StubImageryConfig {
            api_key: None,
            ..StubImageryConfig::default()
        });
        let (start, end) = dates();
        assert_eq!(
            service.request_satellite_imagery(&area(3), start, end).await,
            Err(ImageryError::MissingApiKey)
        );
    }

    #[tokio::test]
    async fn test_quota() {
        let service = service(StubImageryConfig {
            max_jobs: Some(1),
            ..StubImageryConfig::default()
        });
        let (start, end) = dates();
        assert!(service
            .request_satellite_imagery(&area(3), start, end)
            .await
            .is_ok());
        assert_eq!(
            service.request_satellite_imagery(&area(3), start, end).await,
            Err(ImageryError::QuotaExceeded)
        );
    }

    #[tokio::test]
    async fn test_simulated_failure() {
        let service = service(StubImageryConfig::default());
        service.set_simulate_failure(true);
        let (start, end) = dates();
        assert!(matches!(
            service.request_satellite_imagery(&area(3), start, end).await,
            Err(ImageryError::ServiceUnavailable { .. })
        ));
    }
}
