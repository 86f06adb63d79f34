// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared application topology for unit tests

use crate::{Orchestrator, OrchestratorDeps};
use orch_adapters::{FakeClusterControllerClient, StaticInstanceLookup};
use orch_core::{
    ApplicationId, ApplicationInstance, ApplicationInstanceReference, HostName, OrchestratorConfig,
    ServiceCluster,
};
use orch_policy::Policy;
use orch_status::InMemoryStatusService;

pub(crate) type TestOrchestrator<P> =
    Orchestrator<P, StaticInstanceLookup, InMemoryStatusService, FakeClusterControllerClient>;

pub(crate) fn host(name: &str) -> HostName {
    HostName::new(name)
}

pub(crate) fn music_id() -> ApplicationId {
    ApplicationId::new("tenant", "music", "default")
}

pub(crate) fn music_ref() -> ApplicationInstanceReference {
    ApplicationInstanceReference::from_parts("tenant", "music", "prod", "us-east-1", "default")
}

pub(crate) fn books_ref() -> ApplicationInstanceReference {
    ApplicationInstanceReference::from_parts("tenant", "books", "prod", "us-east-1", "default")
}

/// music: content cluster on host1..host3, container on host4, controllers on cc1/cc2
pub(crate) fn music() -> ApplicationInstance {
    ApplicationInstance::new(music_ref())
        .with_cluster(
            ServiceCluster::new("music", "searchnode")
                .with_instance("music/search/0", "host1")
                .with_instance("music/search/1", "host2")
                .with_instance("music/search/2", "host3"),
        )
        .with_cluster(ServiceCluster::new("frontend", "container").with_instance("frontend/0", "host4"))
        .with_cluster(
            ServiceCluster::new("cluster-controllers", "container-clustercontroller")
                .with_instance("admin/cluster-controllers/1", "cc2")
                .with_instance("admin/cluster-controllers/0", "cc1"),
        )
}

/// books: one storage cluster on host6 and host7
pub(crate) fn books() -> ApplicationInstance {
    ApplicationInstance::new(books_ref()).with_cluster(
        ServiceCluster::new("books", "storagenode")
            .with_instance("books/storage/0", "host6")
            .with_instance("books/storage/1", "host7"),
    )
}

pub(crate) struct Harness<P> {
    pub orchestrator: TestOrchestrator<P>,
    pub status: InMemoryStatusService,
    pub controllers: FakeClusterControllerClient,
}

pub(crate) fn harness<P: Policy>(policy: P) -> Harness<P> {
    harness_with_config(policy, &OrchestratorConfig::default())
}

pub(crate) fn harness_with_config<P: Policy>(policy: P, config: &OrchestratorConfig) -> Harness<P> {
    let status = InMemoryStatusService::new().with_lock_timeout(config.lock_timeout);
    let controllers = FakeClusterControllerClient::new();
    let orchestrator = Orchestrator::new(
        OrchestratorDeps {
            policy,
            lookup: StaticInstanceLookup::new([music(), books()]),
            status: status.clone(),
            cluster_controllers: controllers.clone(),
        },
        config,
    );
    Harness {
        orchestrator,
        status,
        controllers,
    }
}
