//! Satellite imagery provider

mod stub_imagery_service;

pub use stub_imagery_service::{StubImageryService, SubmittedJob};
