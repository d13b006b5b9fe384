//! Mock collaborators shared by the flow integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use cams_core::{
    AccountServiceTrait, AuthError, FixedClock, FlowController, FlowSettings, ImageryError,
    ImageryServiceTrait, JobHandle,
};
use cams_core::CooldownTick;
use cams_shared::Coordinate;
use tokio::sync::mpsc::UnboundedReceiver;

#[derive(Debug, Clone, PartialEq)]
pub enum AccountCall {
    Register { email: String, api_key: String },
    RequestCode { email: String },
    Verify { email: String, code: String },
    ChangePassword,
}

#[derive(Default)]
pub struct MockAccountService {
    pub calls: Arc<Mutex<Vec<AccountCall>>>,
    pub should_fail: Arc<Mutex<Option<AuthError>>>,
}

impl MockAccountService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_with(&self, error: AuthError) {
        *self.should_fail.lock().unwrap() = Some(error);
    }

    pub fn succeed(&self) {
        *self.should_fail.lock().unwrap() = None;
    }

    pub fn calls(&self) -> Vec<AccountCall> {
        self.calls.lock().unwrap().clone()
    }

    fn outcome(&self, call: AccountCall) -> Result<(), AuthError> {
        self.calls.lock().unwrap().push(call);
        match self.should_fail.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AccountServiceTrait for MockAccountService {
    async fn register(&self, email: &str, _password: &str, api_key: &str) -> Result<(), AuthError> {
        self.outcome(AccountCall::Register {
            email: email.to_string(),
            api_key: api_key.to_string(),
        })
    }

    async fn request_password_reset_code(&self, email: &str) -> Result<(), AuthError> {
        self.outcome(AccountCall::RequestCode {
            email: email.to_string(),
        })
    }

    async fn verify_reset_code(&self, email: &str, code: &str) -> Result<(), AuthError> {
        self.outcome(AccountCall::Verify {
            email: email.to_string(),
            code: code.to_string(),
        })
    }

    async fn change_password(&self, _new_password: &str) -> Result<(), AuthError> {
        self.outcome(AccountCall::ChangePassword)
    }
}

#[derive(Debug, Clone)]
pub struct ImageryRequest {
    pub area: Vec<Coordinate>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

#[derive(Default)]
pub struct MockImageryService {
    pub requests: Arc<Mutex<Vec<ImageryRequest>>>,
    pub should_fail: Arc<Mutex<Option<ImageryError>>>,
}

impl MockImageryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_with(&self, error: ImageryError) {
        *self.should_fail.lock().unwrap() = Some(error);
    }

    pub fn requests(&self) -> Vec<ImageryRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageryServiceTrait for MockImageryService {
    async fn request_satellite_imagery(
        &self,
        area: &[Coordinate],
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<JobHandle, ImageryError> {
        self.requests.lock().unwrap().push(ImageryRequest {
            area: area.to_vec(),
            start_date,
            end_date,
        });
        match self.should_fail.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(JobHandle::new(end_date)),
        }
    }
}

pub type TestController = FlowController<MockAccountService, MockImageryService>;

pub struct Harness {
    pub controller: TestController,
    pub ticks: UnboundedReceiver<CooldownTick>,
    pub account: Arc<MockAccountService>,
    pub imagery: Arc<MockImageryService>,
    pub clock: FixedClock,
}

/// 2024-06-01 12:00 in Chicago
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 17, 0, 0).unwrap()
}

pub fn harness() -> Harness {
    let account = Arc::new(MockAccountService::new());
    let imagery = Arc::new(MockImageryService::new());
    let clock = FixedClock::new(reference_now());
    let (controller, ticks) = FlowController::new(
        account.clone(),
        imagery.clone(),
        Arc::new(clock.clone()),
        FlowSettings::default(),
    );
    Harness {
        controller,
        ticks,
        account,
        imagery,
        clock,
    }
}
