// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Content cluster controller clients

mod noop;

pub use noop::NoOpClusterControllerClient;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ClusterControllerCall, FakeClusterControllerClient};

use async_trait::async_trait;
use orch_core::{ClusterControllerState, ClusterControllerStateResponse, ClusterId, HostName};
use thiserror::Error;

/// Errors from talking to a cluster controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterControllerError {
    #[error("no cluster controllers known for cluster {0}")]
    NoControllers(ClusterId),
    #[error("cluster controller for {cluster} unreachable: {message}")]
    Io { cluster: ClusterId, message: String },
}

/// Client driving the state of content clusters through their controllers
#[async_trait]
pub trait ClusterControllerClient: Clone + Send + Sync + 'static {
    /// Request `state` for every node of `cluster`
    ///
    /// `controllers` lists the controller hosts in preference order. The
    /// response tells whether the controller actually applied the state.
    async fn set_application_state(
        &self,
        controllers: &[HostName],
        cluster: &ClusterId,
        state: ClusterControllerState,
    ) -> Result<ClusterControllerStateResponse, ClusterControllerError>;
}
