// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lookup over a fixed set of application instances

use super::InstanceLookup;
use async_trait::async_trait;
use orch_core::{ApplicationInstance, ApplicationInstanceReference, HostName};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Index {
    instances: BTreeMap<ApplicationInstanceReference, ApplicationInstance>,
    owners: HashMap<HostName, ApplicationInstanceReference>,
}

/// Instance lookup built from a known list of applications
#[derive(Clone, Debug, Default)]
pub struct StaticInstanceLookup {
    index: Arc<Index>,
}

impl StaticInstanceLookup {
    pub fn new(instances: impl IntoIterator<Item = ApplicationInstance>) -> Self {
        let mut index = Index::default();

        for instance in instances {
            for host in instance.hosts() {
                if let Some(previous) = index.owners.insert(host.clone(), instance.reference.clone())
                {
                    tracing::warn!(
                        host = %host,
                        previous = %previous,
                        owner = %instance.reference,
                        "host claimed by more than one application, keeping the last"
                    );
                }
            }
            index
                .instances
                .insert(instance.reference.clone(), instance);
        }

        Self {
            index: Arc::new(index),
        }
    }
}

#[async_trait]
impl InstanceLookup for StaticInstanceLookup {
    async fn find_instance_by_host(&self, host: &HostName) -> Option<ApplicationInstance> {
        let reference = self.index.owners.get(host)?;
        self.index.instances.get(reference).cloned()
    }

    async fn find_instance_by_id(
        &self,
        reference: &ApplicationInstanceReference,
    ) -> Option<ApplicationInstance> {
        self.index.instances.get(reference).cloned()
    }

    async fn known_instances(&self) -> BTreeSet<ApplicationInstanceReference> {
        self.index.instances.keys().cloned().collect()
    }
}

#[cfg(test)]
#[path = "fixed_tests.rs"]
mod tests;
