// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-cluster concurrent suspension limit

use crate::{HostStateChangeDenied, Policy};
use async_trait::async_trait;
use orch_core::{ApplicationInstance, HostName, HostStatus};
use orch_status::MutableStatusRegistry;

/// Constraint name reported when the limit refuses a suspension
pub const SUSPENSION_LIMIT_CONSTRAINT: &str = "suspension-limit";

/// Allows at most `max_suspended_per_cluster` hosts of any service cluster
/// to be ALLOWED_TO_BE_DOWN at the same time
#[derive(Clone, Copy, Debug)]
pub struct SuspensionLimitPolicy {
    max_suspended_per_cluster: usize,
}

impl SuspensionLimitPolicy {
    pub fn new(max_suspended_per_cluster: usize) -> Self {
        Self {
            max_suspended_per_cluster,
        }
    }

    pub fn max_suspended_per_cluster(&self) -> usize {
        self.max_suspended_per_cluster
    }
}

impl Default for SuspensionLimitPolicy {
    fn default() -> Self {
        Self::new(1)
    }
}

#[async_trait]
impl Policy for SuspensionLimitPolicy {
    async fn grant_suspension_request(
        &self,
        application: &ApplicationInstance,
        host: &HostName,
        registry: &mut dyn MutableStatusRegistry,
    ) -> Result<(), HostStateChangeDenied> {
        for cluster in application.clusters_on_host(host) {
            let hosts = cluster.hosts();
            let suspended = hosts
                .iter()
                .filter(|h| *h != host)
                .filter(|h| registry.host_status(h) == HostStatus::AllowedToBeDown)
                .count();

            if suspended >= self.max_suspended_per_cluster {
                tracing::debug!(
                    host = %host,
                    cluster = %cluster.cluster_id,
                    suspended,
                    "suspension limit reached"
                );
                return Err(HostStateChangeDenied::new(
                    host,
                    SUSPENSION_LIMIT_CONSTRAINT,
                    format!(
                        "{} of {} hosts in {} cluster {} are already allowed to be down, limit is {}",
                        suspended,
                        hosts.len(),
                        cluster.service_type,
                        cluster.cluster_id,
                        self.max_suspended_per_cluster
                    ),
                ));
            }
        }

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

#[cfg(test)]
#[path = "limit_tests.rs"]
mod tests;
