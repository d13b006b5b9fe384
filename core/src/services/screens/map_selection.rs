//! Area selection for a freshly created project

use cams_shared::{Coordinate, MapConfig, MapRegion};

use crate::domain::entities::{AreaSelection, Project};
use crate::domain::value_objects::JobHandle;
use crate::errors::ImageryError;

#[derive(Debug)]
pub struct MapSelectionScreen {
    project: Project,
    region: MapRegion,
    selection: AreaSelection,
    min_area_points: usize,
    job: Option<JobHandle>,
    submit_error: Option<ImageryError>,
}

impl MapSelectionScreen {
    pub fn new(project: Project, config: &MapConfig) -> Self {
        Self {
            project,
            region: config.initial_region,
            selection: AreaSelection::new(),
            min_area_points: config.min_area_points,
            job: None,
            submit_error: None,
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn region(&self) -> MapRegion {
        self.region
    }

    pub fn selection(&self) -> &AreaSelection {
        &self.selection
    }

    pub fn min_area_points(&self) -> usize {
        self.min_area_points
    }

    pub fn job(&self) -> Option<&JobHandle> {
        self.job.as_ref()
    }

    pub fn submit_error(&self) -> Option<&ImageryError> {
        self.submit_error.as_ref()
    }

    pub fn set_region(&mut self, region: MapRegion) {
        self.region = region;
    }

    /// Out-of-range taps are dropped
    pub fn add_point(&mut self, point: Coordinate) -> bool {
        let added = self.selection.add_point(point);
        if added {
            self.submit_error = None;
        } else {
            tracing::warn!(
                latitude = point.latitude,
                longitude = point.longitude,
                event = "area_point_rejected",
                "Ignoring out-of-range map point"
            );
        }
        added
    }

    pub fn undo_last_point(&mut self) -> Option<Coordinate> {
        self.submit_error = None;
        self.selection.undo_last_point()
    }

    pub fn clear(&mut self) {
        self.submit_error = None;
        self.selection.clear();
    }

    pub fn can_confirm(&self) -> bool {
        self.selection.len() >= self.min_area_points
    }

    pub fn record_job(&mut self, job: JobHandle) {
        self.job = Some(job);
        self.submit_error = None;
    }

    pub fn set_submit_error(&mut self, error: ImageryError) {
        self.submit_error = Some(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn screen() -> MapSelectionScreen {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let project = Project::new("North field", "Corn", start, end, end);
        MapSelectionScreen::new(project, &MapConfig::default())
    }

    #[test]
    fn test_initial_region() {
        let screen = screen();
        assert_eq!(screen.region().center, Coordinate::new(37.7749, -122.4194));
        assert!(screen.selection().is_empty());
        assert!(!screen.can_confirm());
    }

    #[test]
    fn test_confirm_gate_follows_point_count() {
        let mut screen = screen();
        assert!(screen.add_point(Coordinate::new(37.77, -122.42)));
        assert!(screen.add_point(Coordinate::new(37.78, -122.42)));
        assert!(!screen.can_confirm());
        assert!(screen.add_point(Coordinate::new(37.78, -122.41)));
        assert!(screen.can_confirm());

        screen.undo_last_point();
        assert!(!screen.can_confirm());

        screen.clear();
        assert!(screen.selection().is_empty());
    }

    #[test]
    fn test_out_of_range_point_ignored() {
        let mut screen = screen();
        assert!(!screen.add_point(Coordinate::new(91.0, 0.0)));
        assert!(!screen.add_point(Coordinate::new(0.0, -180.5)));
        assert!(screen.selection().is_empty());
    }
}
