// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory status store with one lock per application instance

use crate::{MutableStatusRegistry, StatusError, StatusService};
use async_trait::async_trait;
use orch_core::{ApplicationInstanceReference, ApplicationInstanceStatus, HostName, HostStatus};
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;
use tokio::sync::OwnedMutexGuard;

const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Default)]
struct Statuses {
    application: ApplicationInstanceStatus,
    hosts: HashMap<HostName, HostStatus>,
}

/// State of one application instance
///
/// `lock` is the application lock handed out to registries. `statuses` is
/// only written by the registry holding `lock`, but may be read at any time.
#[derive(Debug, Default)]
struct Partition {
    lock: Arc<tokio::sync::Mutex<()>>,
    statuses: RwLock<Statuses>,
}

/// Status store kept in process memory
#[derive(Clone, Debug)]
pub struct InMemoryStatusService {
    partitions: Arc<Mutex<HashMap<ApplicationInstanceReference, Arc<Partition>>>>,
    lock_timeout: Duration,
}

impl Default for InMemoryStatusService {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStatusService {
    pub fn new() -> Self {
        Self {
            partitions: Arc::new(Mutex::new(HashMap::new())),
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }

    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }

    /// Whether a registry currently holds the lock of `reference`
    pub fn is_locked(&self, reference: &ApplicationInstanceReference) -> bool {
        self.existing(reference)
            .map(|p| p.lock.try_lock().is_err())
            .unwrap_or(false)
    }

    fn partition(&self, reference: &ApplicationInstanceReference) -> Arc<Partition> {
        let mut partitions = self.partitions.lock().unwrap_or_else(|e| e.into_inner());
        partitions
            .entry(reference.clone())
            .or_default()
            .clone()
    }

    fn existing(&self, reference: &ApplicationInstanceReference) -> Option<Arc<Partition>> {
        let partitions = self.partitions.lock().unwrap_or_else(|e| e.into_inner());
        partitions.get(reference).cloned()
    }
}

#[async_trait]
impl StatusService for InMemoryStatusService {
    type Registry = InMemoryStatusRegistry;

    async fn lock_application_instance(
        &self,
        reference: &ApplicationInstanceReference,
    ) -> Result<InMemoryStatusRegistry, StatusError> {
        let partition = self.partition(reference);
        let guard = tokio::time::timeout(self.lock_timeout, partition.lock.clone().lock_owned())
            .await
            .map_err(|_| StatusError::LockTimeout {
                reference: reference.clone(),
                timeout: self.lock_timeout,
            })?;

        tracing::trace!(application = %reference, "acquired application lock");

        Ok(InMemoryStatusRegistry {
            reference: reference.clone(),
            partition,
            _guard: guard,
        })
    }

    fn host_status(&self, reference: &ApplicationInstanceReference, host: &HostName) -> HostStatus {
        self.existing(reference)
            .and_then(|p| {
                let statuses = p.statuses.read().unwrap_or_else(|e| e.into_inner());
                statuses.hosts.get(host).copied()
            })
            .unwrap_or_default()
    }

    fn application_instance_status(
        &self,
        reference: &ApplicationInstanceReference,
    ) -> ApplicationInstanceStatus {
        self.existing(reference)
            .map(|p| {
                let statuses = p.statuses.read().unwrap_or_else(|e| e.into_inner());
                statuses.application
            })
            .unwrap_or_default()
    }

    fn all_suspended_applications(&self) -> BTreeSet<ApplicationInstanceReference> {
        let partitions = self.partitions.lock().unwrap_or_else(|e| e.into_inner());
        partitions
            .iter()
            .filter(|(_, p)| {
                let statuses = p.statuses.read().unwrap_or_else(|e| e.into_inner());
                statuses.application == ApplicationInstanceStatus::AllowedToBeDown
            })
            .map(|(reference, _)| reference.clone())
            .collect()
    }
}

/// Registry holding the lock of one application in an [`InMemoryStatusService`]
#[derive(Debug)]
pub struct InMemoryStatusRegistry {
    reference: ApplicationInstanceReference,
    partition: Arc<Partition>,
    _guard: OwnedMutexGuard<()>,
}

impl MutableStatusRegistry for InMemoryStatusRegistry {
    fn reference(&self) -> &ApplicationInstanceReference {
        &self.reference
    }

    fn host_status(&self, host: &HostName) -> HostStatus {
        let statuses = self
            .partition
            .statuses
            .read()
            .unwrap_or_else(|e| e.into_inner());
        statuses.hosts.get(host).copied().unwrap_or_default()
    }

    fn set_host_status(&mut self, host: &HostName, status: HostStatus) {
        tracing::debug!(application = %self.reference, host = %host, %status, "setting host status");
        let mut statuses = self
            .partition
            .statuses
            .write()
            .unwrap_or_else(|e| e.into_inner());
        statuses.hosts.insert(host.clone(), status);
    }

    fn application_instance_status(&self) -> ApplicationInstanceStatus {
        let statuses = self
            .partition
            .statuses
            .read()
            .unwrap_or_else(|e| e.into_inner());
        statuses.application
    }

    fn set_application_instance_status(&mut self, status: ApplicationInstanceStatus) {
        tracing::debug!(application = %self.reference, %status, "setting application status");
        let mut statuses = self
            .partition
            .statuses
            .write()
            .unwrap_or_else(|e| e.into_inner());
        statuses.application = status;
    }
}

impl Drop for InMemoryStatusRegistry {
    fn drop(&mut self) {
        tracing::trace!(application = %self.reference, "released application lock");
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
