// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Application model: instances, service clusters and their hosts

use crate::id::{ApplicationInstanceReference, ClusterId, ConfigId, HostName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Cluster id holding an application's cluster controllers
pub const CLUSTER_CONTROLLER_CLUSTER_ID: &str = "cluster-controllers";

/// Service type of a cluster controller container
pub const CLUSTER_CONTROLLER_SERVICE_TYPE: &str = "container-clustercontroller";

pub const DISTRIBUTOR_SERVICE_TYPE: &str = "distributor";
pub const SEARCHNODE_SERVICE_TYPE: &str = "searchnode";
pub const STORAGENODE_SERVICE_TYPE: &str = "storagenode";

/// Kind of service running in a cluster
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ServiceType(pub String);

impl ServiceType {
    pub fn new(service_type: impl Into<String>) -> Self {
        Self(service_type.into())
    }

    /// Content services are driven through their cluster controller
    pub fn is_content(&self) -> bool {
        matches!(
            self.0.as_str(),
            DISTRIBUTOR_SERVICE_TYPE | SEARCHNODE_SERVICE_TYPE | STORAGENODE_SERVICE_TYPE
        )
    }

    pub fn is_cluster_controller(&self) -> bool {
        self.0 == CLUSTER_CONTROLLER_SERVICE_TYPE
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One running service on one host
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInstance {
    pub config_id: ConfigId,
    pub host: HostName,
}

impl ServiceInstance {
    pub fn new(config_id: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            config_id: ConfigId::new(config_id),
            host: HostName::new(host),
        }
    }
}

/// A named, typed group of services belonging to one application
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCluster {
    pub cluster_id: ClusterId,
    pub service_type: ServiceType,
    pub instances: Vec<ServiceInstance>,
}

impl ServiceCluster {
    pub fn new(cluster_id: impl Into<String>, service_type: impl Into<String>) -> Self {
        Self {
            cluster_id: ClusterId::new(cluster_id),
            service_type: ServiceType::new(service_type),
            instances: Vec::new(),
        }
    }

    pub fn with_instance(mut self, config_id: impl Into<String>, host: impl Into<String>) -> Self {
        self.instances.push(ServiceInstance::new(config_id, host));
        self
    }

    pub fn is_content(&self) -> bool {
        self.service_type.is_content()
    }

    /// Whether any service of this cluster runs on `host`
    pub fn has_host(&self, host: &HostName) -> bool {
        self.instances.iter().any(|i| &i.host == host)
    }

    /// Distinct hosts of this cluster
    pub fn hosts(&self) -> BTreeSet<HostName> {
        self.instances.iter().map(|i| i.host.clone()).collect()
    }
}

/// One deployed application instance and its service clusters
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationInstance {
    pub reference: ApplicationInstanceReference,
    pub service_clusters: Vec<ServiceCluster>,
}

impl ApplicationInstance {
    pub fn new(reference: ApplicationInstanceReference) -> Self {
        Self {
            reference,
            service_clusters: Vec::new(),
        }
    }

    pub fn with_cluster(mut self, cluster: ServiceCluster) -> Self {
        self.service_clusters.push(cluster);
        self
    }

    /// Every host running at least one service of this application
    pub fn hosts(&self) -> BTreeSet<HostName> {
        self.service_clusters
            .iter()
            .flat_map(|c| c.instances.iter().map(|i| i.host.clone()))
            .collect()
    }

    pub fn has_host(&self, host: &HostName) -> bool {
        self.service_clusters.iter().any(|c| c.has_host(host))
    }

    /// Service clusters with at least one service on `host`
    pub fn clusters_on_host<'a>(
        &'a self,
        host: &'a HostName,
    ) -> impl Iterator<Item = &'a ServiceCluster> + 'a {
        self.service_clusters.iter().filter(move |c| c.has_host(host))
    }

    /// Distinct ids of the content clusters of this application
    pub fn content_cluster_ids(&self) -> BTreeSet<ClusterId> {
        self.service_clusters
            .iter()
            .filter(|c| c.is_content())
            .map(|c| c.cluster_id.clone())
            .collect()
    }

    /// Hosts of the cluster controllers, ordered by controller index
    ///
    /// Controllers with a config id that does not end in an index sort last.
    pub fn cluster_controllers_in_order(&self) -> Vec<HostName> {
        let mut controllers: Vec<(Option<u32>, &ServiceInstance)> = self
            .service_clusters
            .iter()
            .filter(|c| {
                c.cluster_id.as_str() == CLUSTER_CONTROLLER_CLUSTER_ID
                    && c.service_type.is_cluster_controller()
            })
            .flat_map(|c| c.instances.iter())
            .map(|i| (controller_index(&i.config_id), i))
            .collect();

        controllers.sort_by(|(left, _), (right, _)| match (left, right) {
            (Some(l), Some(r)) => l.cmp(r),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        controllers.into_iter().map(|(_, i)| i.host.clone()).collect()
    }
}

/// Index suffix of a controller config id, e.g. `admin/cluster-controllers/2` -> 2
fn controller_index(config_id: &ConfigId) -> Option<u32> {
    config_id.as_str().rsplit('/').next()?.parse().ok()
}

#[cfg(test)]
#[path = "application_tests.rs"]
mod tests;
