// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake policy for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{AllowAllPolicy, HostStateChangeDenied, Policy};
use async_trait::async_trait;
use orch_core::{ApplicationInstance, HostName};
use orch_status::MutableStatusRegistry;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Recorded policy call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyCall {
    Grant { host: HostName },
    Release { host: HostName },
}

#[derive(Default)]
struct FakeState {
    calls: Vec<PolicyCall>,
    deny_suspend: HashSet<HostName>,
    deny_resume: HashSet<HostName>,
}

/// Allow-all policy with call recording and per-host denials
#[derive(Clone, Default)]
pub struct FakePolicy {
    state: Arc<Mutex<FakeState>>,
}

impl FakePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<PolicyCall> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    /// Clear recorded calls
    pub fn clear_calls(&self) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clear();
    }

    /// Deny suspension requests for `host`
    pub fn deny_suspend(&self, host: &str) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .deny_suspend
            .insert(HostName::new(host));
    }

    /// Deny releasing the suspension of `host`
    pub fn deny_resume(&self, host: &str) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .deny_resume
            .insert(HostName::new(host));
    }
}

#[async_trait]
impl Policy for FakePolicy {
    async fn grant_suspension_request(
        &self,
        application: &ApplicationInstance,
        host: &HostName,
        registry: &mut dyn MutableStatusRegistry,
    ) -> Result<(), HostStateChangeDenied> {
        let denied = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.calls.push(PolicyCall::Grant { host: host.clone() });
            state.deny_suspend.contains(host)
        };

        if denied {
            return Err(HostStateChangeDenied::new(host, "fake", "suspension denied"));
        }
        AllowAllPolicy
            .grant_suspension_request(application, host, registry)
            .await
    }

    async fn release_suspension_grant(
        &self,
        application: &ApplicationInstance,
        host: &HostName,
        registry: &mut dyn MutableStatusRegistry,
    ) -> Result<(), HostStateChangeDenied> {
        let denied = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.calls.push(PolicyCall::Release { host: host.clone() });
            state.deny_resume.contains(host)
        };

        if denied {
            return Err(HostStateChangeDenied::new(host, "fake", "resume denied"));
        }
        AllowAllPolicy
            .release_suspension_grant(application, host, registry)
            .await
    }
}
