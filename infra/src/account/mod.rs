//! Account backend
//!
//! In-memory implementation of [`cams_core::AccountServiceTrait`].

mod stub_account_service;

pub use stub_account_service::StubAccountService;
