// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Suspend/resume coordination for hosts and applications
//!
//! Every mutation happens while holding the lock of the owning application
//! instance. Operations on different applications never wait for each other.

use crate::error::{ApplicationError, HostError};
use orch_adapters::{ClusterControllerClient, InstanceLookup};
use orch_core::{
    ApplicationId, ApplicationInstance, ApplicationInstanceStatus, ClusterControllerState,
    HostName, HostStatus, OrchestratorConfig,
};
use orch_policy::Policy;
use orch_status::{MutableStatusRegistry, StatusService};
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Collaborators of the orchestrator
pub struct OrchestratorDeps<P, L, S, C> {
    pub policy: P,
    pub lookup: L,
    pub status: S,
    pub cluster_controllers: C,
}

/// Coordinator deciding and recording suspensions
///
/// The status service owns the lock timeout; the orchestrator only adds the
/// convergence delay applied before resuming a host.
pub struct Orchestrator<P, L, S, C> {
    pub(crate) policy: P,
    pub(crate) lookup: L,
    pub(crate) status: S,
    pub(crate) cluster_controllers: C,
    convergence_latency: Duration,
}

impl<P, L, S, C> Orchestrator<P, L, S, C>
where
    P: Policy,
    L: InstanceLookup,
    S: StatusService,
    C: ClusterControllerClient,
{
    pub fn new(deps: OrchestratorDeps<P, L, S, C>, config: &OrchestratorConfig) -> Self {
        Self {
            policy: deps.policy,
            lookup: deps.lookup,
            status: deps.status,
            cluster_controllers: deps.cluster_controllers,
            convergence_latency: config.service_monitor_convergence_latency,
        }
    }

    /// Current status of a host
    pub async fn node_status(&self, host: &HostName) -> Result<HostStatus, HostError> {
        let application = self.instance_for_host(host).await?;
        Ok(self.status.host_status(&application.reference, host))
    }

    /// Ask for permission to take `host` down
    ///
    /// Succeeds immediately if the host is already allowed to be down. While
    /// its application is suspended as a whole the policy is not consulted.
    pub async fn suspend_host(&self, host: &HostName) -> Result<(), HostError> {
        let application = self.instance_for_host(host).await?;
        let mut registry = self
            .status
            .lock_application_instance(&application.reference)
            .await?;

        if registry.host_status(host) == HostStatus::AllowedToBeDown {
            debug!(host = %host, "host already allowed to be down");
            return Ok(());
        }

        if registry.application_instance_status() == ApplicationInstanceStatus::AllowedToBeDown {
            info!(host = %host, application = %application.reference, "application suspended, allowing host down");
            registry.set_host_status(host, HostStatus::AllowedToBeDown);
            return Ok(());
        }

        if let Err(denied) = self
            .policy
            .grant_suspension_request(&application, host, &mut registry)
            .await
        {
            warn!(host = %host, constraint = %denied.constraint, reason = %denied.reason, "suspension denied");
            return Err(denied.into());
        }

        info!(host = %host, application = %application.reference, "host allowed to be down");
        Ok(())
    }

    /// Return `host` to normal service expectations
    ///
    /// Waits for the configured convergence latency before taking the lock,
    /// so service monitoring can notice services stopped while suspended.
    pub async fn resume_host(&self, host: &HostName) -> Result<(), HostError> {
        if !self.convergence_latency.is_zero() {
            debug!(host = %host, latency = ?self.convergence_latency, "waiting for service monitor convergence");
            tokio::time::sleep(self.convergence_latency).await;
        }

        let application = self.instance_for_host(host).await?;
        let mut registry = self
            .status
            .lock_application_instance(&application.reference)
            .await?;

        if registry.host_status(host) == HostStatus::NoRemarks {
            debug!(host = %host, "host already has no remarks");
            return Ok(());
        }

        // An application-wide suspension keeps the host down until it is lifted
        if registry.application_instance_status() == ApplicationInstanceStatus::NoRemarks {
            if let Err(denied) = self
                .policy
                .release_suspension_grant(&application, host, &mut registry)
                .await
            {
                warn!(host = %host, constraint = %denied.constraint, reason = %denied.reason, "resume denied");
                return Err(denied.into());
            }
            info!(host = %host, application = %application.reference, "host resumed");
        }

        Ok(())
    }

    /// Last committed status of an application
    pub async fn application_instance_status(
        &self,
        id: &ApplicationId,
    ) -> Result<ApplicationInstanceStatus, ApplicationError> {
        let reference = self
            .lookup
            .reference_for(id)
            .await
            .ok_or_else(|| ApplicationError::NotFound(id.clone()))?;
        Ok(self.status.application_instance_status(&reference))
    }

    /// Applications currently suspended as a whole
    pub fn all_suspended_applications(&self) -> BTreeSet<ApplicationId> {
        self.status
            .all_suspended_applications()
            .iter()
            .map(|reference| reference.to_application_id())
            .collect()
    }

    /// Allow every host of an application to be down
    pub async fn suspend_application(&self, id: &ApplicationId) -> Result<(), ApplicationError> {
        self.set_application_status(id, ApplicationInstanceStatus::AllowedToBeDown)
            .await
    }

    /// Lift an application-wide suspension
    ///
    /// Host statuses are left as they are; resuming each host resets it.
    pub async fn resume_application(&self, id: &ApplicationId) -> Result<(), ApplicationError> {
        self.set_application_status(id, ApplicationInstanceStatus::NoRemarks)
            .await
    }

    async fn set_application_status(
        &self,
        id: &ApplicationId,
        target: ApplicationInstanceStatus,
    ) -> Result<(), ApplicationError> {
        let reference = self
            .lookup
            .reference_for(id)
            .await
            .ok_or_else(|| ApplicationError::NotFound(id.clone()))?;
        let mut registry = self.status.lock_application_instance(&reference).await?;

        if registry.application_instance_status() == target {
            debug!(application = %reference, status = %target, "application already in wanted state");
            return Ok(());
        }

        if target == ApplicationInstanceStatus::AllowedToBeDown {
            let application = self
                .lookup
                .find_instance_by_id(&reference)
                .await
                .ok_or_else(|| ApplicationError::NotFound(id.clone()))?;

            // Hosts are committed as down before any controller is touched. A
            // controller failure below leaves them down until they are resumed.
            for host in application.hosts() {
                registry.set_host_status(&host, HostStatus::AllowedToBeDown);
            }

            self.set_cluster_state_in_controller(&application, ClusterControllerState::Maintenance)
                .await?;
        }

        registry.set_application_instance_status(target);
        info!(application = %reference, status = %target, "application status changed");
        Ok(())
    }

    async fn set_cluster_state_in_controller(
        &self,
        application: &ApplicationInstance,
        state: ClusterControllerState,
    ) -> Result<(), ApplicationError> {
        let cluster_ids = application.content_cluster_ids();
        let controllers = application.cluster_controllers_in_order();

        info!(
            application = %application.reference,
            clusters = ?cluster_ids,
            %state,
            "setting content clusters"
        );

        for cluster in &cluster_ids {
            let reason = match self
                .cluster_controllers
                .set_application_state(&controllers, cluster, state)
                .await
            {
                Ok(response) if response.was_modified => continue,
                Ok(response) => response.reason,
                Err(e) => e.to_string(),
            };
            warn!(application = %application.reference, cluster = %cluster, %reason, "cluster state not applied");
            return Err(ApplicationError::Denied(format!(
                "failed to set application {}, cluster {} to cluster state {} due to: {}",
                application.reference, cluster, state, reason
            )));
        }

        Ok(())
    }

    pub(crate) async fn instance_for_host(
        &self,
        host: &HostName,
    ) -> Result<ApplicationInstance, HostError> {
        self.lookup
            .find_instance_by_host(host)
            .await
            .ok_or_else(|| HostError::NotFound(host.clone()))
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
