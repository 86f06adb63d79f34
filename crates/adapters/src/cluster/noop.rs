// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op cluster controller client for deployments without content clusters.

use super::{ClusterControllerClient, ClusterControllerError};
use async_trait::async_trait;
use orch_core::{ClusterControllerState, ClusterControllerStateResponse, ClusterId, HostName};

/// Cluster controller client that reports every request as applied.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpClusterControllerClient;

impl NoOpClusterControllerClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClusterControllerClient for NoOpClusterControllerClient {
    async fn set_application_state(
        &self,
        _controllers: &[HostName],
        _cluster: &ClusterId,
        _state: ClusterControllerState,
    ) -> Result<ClusterControllerStateResponse, ClusterControllerError> {
        Ok(ClusterControllerStateResponse::applied())
    }
}
