// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Suspension policies
//!
//! A [`Policy`] decides whether a single host may be suspended or resumed.
//! It is always called with the application's lock held and records its
//! decision directly in the [`MutableStatusRegistry`] it is given.

mod allow_all;
mod limit;

pub use allow_all::AllowAllPolicy;
pub use limit::{SuspensionLimitPolicy, SUSPENSION_LIMIT_CONSTRAINT};

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakePolicy, PolicyCall};

use async_trait::async_trait;
use orch_core::{ApplicationInstance, HostName};
use orch_status::MutableStatusRegistry;
use thiserror::Error;

/// A policy refused to change the state of a host
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("changing the state of {host} would violate {constraint}: {reason}")]
pub struct HostStateChangeDenied {
    pub host: HostName,
    /// Name of the rule that refused
    pub constraint: String,
    pub reason: String,
}

impl HostStateChangeDenied {
    pub fn new(host: &HostName, constraint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            host: host.clone(),
            constraint: constraint.into(),
            reason: reason.into(),
        }
    }
}

/// Fleet-safety decision function
#[async_trait]
pub trait Policy: Send + Sync + 'static {
    /// Grant or deny suspension of `host`
    ///
    /// On grant the policy marks the host ALLOWED_TO_BE_DOWN in `registry`.
    async fn grant_suspension_request(
        &self,
        application: &ApplicationInstance,
        host: &HostName,
        registry: &mut dyn MutableStatusRegistry,
    ) -> Result<(), HostStateChangeDenied>;

    /// Release a previously granted suspension of `host`
    ///
    /// On success the policy marks the host NO_REMARKS in `registry`.
    async fn release_suspension_grant(
        &self,
        application: &ApplicationInstance,
        host: &HostName,
        registry: &mut dyn MutableStatusRegistry,
    ) -> Result<(), HostStateChangeDenied>;
}
