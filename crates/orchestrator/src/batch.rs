// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch suspension of sibling hosts
//!
//! Hosts are suspended one at a time in an order that depends only on their
//! identifiers. Two callers with overlapping host sets therefore contend for
//! shared members in the same sequence, and one of them makes progress.

use crate::error::{BatchError, HostError};
use crate::orchestrator::Orchestrator;
use orch_adapters::{ClusterControllerClient, InstanceLookup};
use orch_core::{ApplicationInstanceReference, HostName};
use orch_policy::Policy;
use orch_status::StatusService;
use tracing::{debug, info, info_span, warn, Instrument};

impl<P, L, S, C> Orchestrator<P, L, S, C>
where
    P: Policy,
    L: InstanceLookup,
    S: StatusService,
    C: ClusterControllerClient,
{
    /// Order hosts by owning application reference, then by host name
    ///
    /// Fails if any host cannot be resolved to an application.
    pub async fn sort_host_names_for_suspend(
        &self,
        hosts: &[HostName],
    ) -> Result<Vec<HostName>, HostError> {
        let mut keyed = Vec::with_capacity(hosts.len());
        for host in hosts {
            let application = self.instance_for_host(host).await?;
            keyed.push((application.reference, host.clone()));
        }
        Ok(order_for_suspend(keyed))
    }

    /// Suspend every host of `hosts` or none of them
    ///
    /// On the first failure the hosts already suspended by this call are
    /// resumed in reverse order. Resume failures during that rollback do not
    /// stop it; they are attached to the returned error as `suppressed`.
    pub async fn suspend_all(
        &self,
        parent: &HostName,
        hosts: Vec<HostName>,
    ) -> Result<(), BatchError> {
        let span = info_span!("suspend_all", parent = %parent, count = hosts.len());
        self.suspend_all_inner(parent, hosts).instrument(span).await
    }

    async fn suspend_all_inner(
        &self,
        parent: &HostName,
        hosts: Vec<HostName>,
    ) -> Result<(), BatchError> {
        let ordered = match self.sort_host_names_for_suspend(&hosts).await {
            Ok(ordered) => ordered,
            Err(cause) => {
                warn!(error = %cause, "could not resolve batch");
                return Err(BatchError::new(parent.clone(), hosts, cause));
            }
        };
        debug!(order = ?ordered, "suspending in order");

        for (position, host) in ordered.iter().enumerate() {
            let cause = match self.suspend_host(host).await {
                Ok(()) => continue,
                Err(cause) => cause,
            };

            warn!(host = %host, position, error = %cause, "batch member failed, rolling back");
            let mut error = BatchError::new(parent.clone(), hosts, cause);
            for done in ordered[..position].iter().rev() {
                if let Err(e) = self.resume_host(done).await {
                    warn!(host = %done, error = %e, "rollback resume failed");
                    error.suppressed.push(e);
                }
            }
            return Err(error);
        }

        info!("batch suspended");
        Ok(())
    }
}

/// Sort resolved hosts ascending by (reference, host)
///
/// References compare by their canonical string form, so the result is the
/// same for every permutation of the input.
fn order_for_suspend(mut keyed: Vec<(ApplicationInstanceReference, HostName)>) -> Vec<HostName> {
    keyed.sort();
    keyed.into_iter().map(|(_, host)| host).collect()
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
