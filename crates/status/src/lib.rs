// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Host and application status storage
//!
//! All mutation goes through a [`MutableStatusRegistry`], which holds the
//! application's exclusive lock for as long as it lives. Dropping the
//! registry releases the lock.

mod memory;

pub use memory::{InMemoryStatusRegistry, InMemoryStatusService};

use async_trait::async_trait;
use orch_core::{ApplicationInstanceReference, ApplicationInstanceStatus, HostName, HostStatus};
use std::collections::BTreeSet;
use std::time::Duration;
use thiserror::Error;

/// Errors from the status store
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("timed out after {timeout:?} waiting for the lock of {reference}")]
    LockTimeout {
        reference: ApplicationInstanceReference,
        timeout: Duration,
    },
}

/// Read/write view of one application's statuses, valid while its lock is held
pub trait MutableStatusRegistry: Send {
    /// The application this registry is locked for
    fn reference(&self) -> &ApplicationInstanceReference;

    fn host_status(&self, host: &HostName) -> HostStatus;

    fn set_host_status(&mut self, host: &HostName, status: HostStatus);

    fn application_instance_status(&self) -> ApplicationInstanceStatus;

    fn set_application_instance_status(&mut self, status: ApplicationInstanceStatus);
}

/// Shared status store partitioned by application instance
#[async_trait]
pub trait StatusService: Clone + Send + Sync + 'static {
    type Registry: MutableStatusRegistry + 'static;

    /// Acquire the exclusive lock of an application
    ///
    /// Waits while another registry for the same application is alive.
    /// Registries of different applications never block each other.
    async fn lock_application_instance(
        &self,
        reference: &ApplicationInstanceReference,
    ) -> Result<Self::Registry, StatusError>;

    /// Last committed status of a host, without locking
    fn host_status(&self, reference: &ApplicationInstanceReference, host: &HostName) -> HostStatus;

    /// Last committed application status, without locking
    fn application_instance_status(
        &self,
        reference: &ApplicationInstanceReference,
    ) -> ApplicationInstanceStatus;

    /// Applications currently ALLOWED_TO_BE_DOWN as a whole
    fn all_suspended_applications(&self) -> BTreeSet<ApplicationInstanceReference>;
}
