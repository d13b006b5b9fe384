//! Project form rules.

mod dates;

pub use dates::{validate_project_dates, validate_project_dates_in, REFERENCE_TIME_ZONE};
