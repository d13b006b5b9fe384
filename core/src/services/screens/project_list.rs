//! Session-local list of created projects

use crate::domain::entities::Project;

#[derive(Debug, Default)]
pub struct ProjectListScreen {
    projects: Vec<Project>,
}

impl ProjectListScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Insert `project`, or replace the entry with the same id in place.
    ///
    /// Returns `true` when the project was new to the list.
    pub fn upsert(&mut self, project: Project) -> bool {
        match self.projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => {
                *existing = project;
                false
            }
            None => {
                self.projects.push(project);
                true
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn project(name: &str) -> Project {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 17, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 2, 1, 17, 0, 0).unwrap();
        Project::new(name, "Corn", start, end, end)
    }

    #[test]
    fn test_upsert_replaces_same_id() {
        let mut list = ProjectListScreen::new();
        let mut north = project("North field");
        assert!(list.upsert(north.clone()));
        assert!(list.upsert(project("South field")));

        north.crop_name = "Wheat".to_string();
        assert!(!list.upsert(north.clone()));

        assert_eq!(list.projects().len(), 2);
        assert_eq!(list.projects()[0], north);
    }
}
