//! New-project form

use cams_shared::error_codes;
use cams_shared::validation::ValidationErrors;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use uuid::Uuid;

use crate::domain::entities::Project;
use crate::domain::value_objects::Advisory;
use crate::errors::{DateRangeError, DomainError, DomainResult};
use crate::services::project::validate_project_dates_in;

#[derive(Debug)]
pub struct AddProjectScreen {
    name: String,
    crop_name: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    date_error: Option<DateRangeError>,
    zone: Tz,
    /// Id of the project this form already produced
    project_id: Option<Uuid>,
}

impl AddProjectScreen {
    /// Both dates start at `now`; the date error stays hidden until edited
    pub fn new(now: DateTime<Utc>, zone: Tz) -> Self {
        Self {
            name: String::new(),
            crop_name: String::new(),
            start_date: now,
            end_date: now,
            date_error: None,
            zone,
            project_id: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn crop_name(&self) -> &str {
        &self.crop_name
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    pub fn date_error(&self) -> Option<DateRangeError> {
        self.date_error
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_crop_name(&mut self, crop_name: impl Into<String>) {
        self.crop_name = crop_name.into();
    }

    pub fn set_start_date(&mut self, start: DateTime<Utc>, now: DateTime<Utc>) {
        self.start_date = start;
        self.recheck_dates(now);
    }

    pub fn set_end_date(&mut self, end: DateTime<Utc>, now: DateTime<Utc>) {
        self.end_date = end;
        self.recheck_dates(now);
    }

    fn recheck_dates(&mut self, now: DateTime<Utc>) {
        self.date_error =
            validate_project_dates_in(self.zone, self.start_date, self.end_date, now).err();
    }

    pub fn can_submit(&self) -> bool {
        self.date_error.is_none() && !self.name.is_empty() && !self.crop_name.is_empty()
    }

    /// Re-run the date check against `now` and build the project.
    ///
    /// A failing date check is remembered so the advisory shows.
    pub fn submit(&mut self, now: DateTime<Utc>) -> DomainResult<Project> {
        let mut errors = ValidationErrors::new();
        if self.name.is_empty() {
            errors.add_error("name", error_codes::REQUIRED_FIELD);
        }
        if self.crop_name.is_empty() {
            errors.add_error("crop_name", error_codes::REQUIRED_FIELD);
        }
        errors.into_result()?;

        self.recheck_dates(now);
        if let Some(error) = self.date_error {
            return Err(DomainError::DateRange(error));
        }

        let mut project = Project::new(
            self.name.clone(),
            self.crop_name.clone(),
            self.start_date,
            self.end_date,
            now,
        );
        // Resubmitting the same form edits the project it created
        match self.project_id {
            Some(id) => project.id = id,
            None => self.project_id = Some(project.id),
        }
        Ok(project)
    }

    pub fn project_id(&self) -> Option<Uuid> {
        self.project_id
    }

    pub fn advisories(&self) -> Vec<Advisory> {
        self.date_error.map(Advisory::DateRange).into_iter().collect()
    }
}
