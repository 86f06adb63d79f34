// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host and application instance lookup

mod fixed;

pub use fixed::StaticInstanceLookup;

use async_trait::async_trait;
use orch_core::{ApplicationId, ApplicationInstance, ApplicationInstanceReference, HostName};
use std::collections::BTreeSet;

/// Resolves hosts and references to the application instances that own them
#[async_trait]
pub trait InstanceLookup: Clone + Send + Sync + 'static {
    /// The application instance running services on `host`
    async fn find_instance_by_host(&self, host: &HostName) -> Option<ApplicationInstance>;

    async fn find_instance_by_id(
        &self,
        reference: &ApplicationInstanceReference,
    ) -> Option<ApplicationInstance>;

    /// References of every known application instance
    async fn known_instances(&self) -> BTreeSet<ApplicationInstanceReference>;

    /// Map a user-facing application id to its deployed instance reference
    ///
    /// Resolves only when exactly one known instance matches. An id deployed
    /// in several environments or regions is ambiguous and yields `None`.
    async fn reference_for(&self, id: &ApplicationId) -> Option<ApplicationInstanceReference> {
        let mut matching = self
            .known_instances()
            .await
            .into_iter()
            .filter(|reference| reference.matches(id));

        let reference = matching.next()?;
        if let Some(other) = matching.next() {
            tracing::warn!(
                application = %id,
                first = %reference,
                second = %other,
                "application id matches more than one instance"
            );
            return None;
        }
        Some(reference)
    }
}
