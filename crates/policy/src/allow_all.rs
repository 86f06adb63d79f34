// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Policy granting every request.

use crate::{HostStateChangeDenied, Policy};
use async_trait::async_trait;
use orch_core::{ApplicationInstance, HostName, HostStatus};
use orch_status::MutableStatusRegistry;

/// Policy that never denies.
///
/// Used when fleet-safety checks are disabled or in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAllPolicy;

impl AllowAllPolicy {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Policy for AllowAllPolicy {
    async fn grant_suspension_request(
        &self,
        _application: &ApplicationInstance,
        host: &HostName,
        registry: &mut dyn MutableStatusRegistry,
    ) -> Result<(), HostStateChangeDenied> {
        registry.set_host_status(host, HostStatus::AllowedToBeDown);
        Ok(())
    }

    async fn release_suspension_grant(
        &self,
        _application: &ApplicationInstance,
        host: &HostName,
        registry: &mut dyn MutableStatusRegistry,
    ) -> Result<(), HostStateChangeDenied> {
        registry.set_host_status(host, HostStatus::NoRemarks);
        Ok(())
    }
}
