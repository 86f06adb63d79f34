// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake cluster controller client for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ClusterControllerClient, ClusterControllerError};
use async_trait::async_trait;
use orch_core::{ClusterControllerState, ClusterControllerStateResponse, ClusterId, HostName};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Recorded cluster controller call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterControllerCall {
    pub controllers: Vec<HostName>,
    pub cluster: ClusterId,
    pub state: ClusterControllerState,
}

#[derive(Debug, Clone)]
enum Outcome {
    Refuse(String),
    Fail(String),
}

#[derive(Default)]
struct FakeState {
    calls: Vec<ClusterControllerCall>,
    outcomes: HashMap<ClusterId, Outcome>,
    delay: Option<Duration>,
}

/// Fake cluster controller client with call recording
#[derive(Clone, Default)]
pub struct FakeClusterControllerClient {
    state: Arc<Mutex<FakeState>>,
}

impl FakeClusterControllerClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ClusterControllerCall> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    /// Make the controller of `cluster` answer "not modified"
    pub fn refuse(&self, cluster: &str, reason: impl Into<String>) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .outcomes
            .insert(ClusterId::new(cluster), Outcome::Refuse(reason.into()));
    }

    /// Make calls for `cluster` fail with an I/O error
    pub fn fail(&self, cluster: &str, message: impl Into<String>) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .outcomes
            .insert(ClusterId::new(cluster), Outcome::Fail(message.into()));
    }

    /// Delay every call, simulating a slow controller
    pub fn set_delay(&self, delay: Duration) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).delay = Some(delay);
    }
}

#[async_trait]
impl ClusterControllerClient for FakeClusterControllerClient {
    async fn set_application_state(
        &self,
        controllers: &[HostName],
        cluster: &ClusterId,
        state: ClusterControllerState,
    ) -> Result<ClusterControllerStateResponse, ClusterControllerError> {
        let (delay, outcome) = {
            let mut fake = self.state.lock().unwrap_or_else(|e| e.into_inner());
            fake.calls.push(ClusterControllerCall {
                controllers: controllers.to_vec(),
                cluster: cluster.clone(),
                state,
            });
            (fake.delay, fake.outcomes.get(cluster).cloned())
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match outcome {
            None => Ok(ClusterControllerStateResponse::applied()),
            Some(Outcome::Refuse(reason)) => Ok(ClusterControllerStateResponse::refused(reason)),
            Some(Outcome::Fail(message)) => Err(ClusterControllerError::Io {
                cluster: cluster.clone(),
                message,
            }),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
