// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::cluster::{ClusterControllerClient, ClusterControllerError};
use async_trait::async_trait;
use orch_core::{ClusterControllerState, ClusterControllerStateResponse, ClusterId, HostName};
use tracing::Instrument;

/// Wrapper that adds tracing to any ClusterControllerClient
#[derive(Clone)]
pub struct TracedClusterControllerClient<C> {
    inner: C,
}

impl<C> TracedClusterControllerClient<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C: ClusterControllerClient> ClusterControllerClient for TracedClusterControllerClient<C> {
    async fn set_application_state(
        &self,
        controllers: &[HostName],
        cluster: &ClusterId,
        state: ClusterControllerState,
    ) -> Result<ClusterControllerStateResponse, ClusterControllerError> {
        let span = tracing::info_span!("cluster.set_state", cluster = %cluster, %state);

        async move {
            tracing::info!(controllers = controllers.len(), "requesting");

            // Precondition: someone has to receive the request
            if controllers.is_empty() {
                tracing::error!("no cluster controllers");
                return Err(ClusterControllerError::NoControllers(cluster.clone()));
            }

            let start = std::time::Instant::now();
            let result = self
                .inner
                .set_application_state(controllers, cluster, state)
                .await;
            let elapsed = start.elapsed();

            match &result {
                Ok(response) if response.was_modified => tracing::info!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    "state applied"
                ),
                Ok(response) => tracing::warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    reason = %response.reason,
                    "state not applied"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "request failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
