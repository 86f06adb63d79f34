//! Shared setup for orchestrator specs

#![allow(dead_code)]

pub use orch_adapters::{
    FakeClusterControllerClient, StaticInstanceLookup, TracedClusterControllerClient,
};
pub use orch_core::{
    ApplicationId, ApplicationInstance, ApplicationInstanceReference, ApplicationInstanceStatus,
    HostName, HostStatus, OrchestratorConfig, ServiceCluster,
};
pub use orch_engine::{
    ApplicationError, BatchErrorKind, ErrorCategory, HostError, Orchestrator, OrchestratorDeps,
};
pub use orch_policy::{FakePolicy, Policy, PolicyCall, SuspensionLimitPolicy};
pub use orch_status::{InMemoryStatusService, StatusService};
pub use std::sync::Arc;
pub use std::time::Duration;

pub type SpecOrchestrator<P> = Orchestrator<
    P,
    StaticInstanceLookup,
    InMemoryStatusService,
    TracedClusterControllerClient<FakeClusterControllerClient>,
>;

pub fn host(name: &str) -> HostName {
    HostName::new(name)
}

pub fn hosts(names: &[&str]) -> Vec<HostName> {
    names.iter().map(|n| host(n)).collect()
}

pub fn reference(app: &str) -> ApplicationInstanceReference {
    ApplicationInstanceReference::from_parts("tenant", app, "prod", "us-east-1", "default")
}

pub fn app_id(app: &str) -> ApplicationId {
    ApplicationId::new("tenant", app, "default")
}

/// Application with one storage cluster named after it on `nodes`, and a
/// cluster controller on `<app>-cc`
pub fn content_app(app: &str, nodes: &[&str]) -> ApplicationInstance {
    let storage = nodes
        .iter()
        .enumerate()
        .fold(ServiceCluster::new(app, "storagenode"), |cluster, (i, node)| {
            cluster.with_instance(format!("{}/storage/{}", app, i), *node)
        });

    ApplicationInstance::new(reference(app))
        .with_cluster(storage)
        .with_cluster(
            ServiceCluster::new("cluster-controllers", "container-clustercontroller")
                .with_instance("admin/cluster-controllers/0", format!("{}-cc", app)),
        )
}

pub struct World<P> {
    pub orchestrator: Arc<SpecOrchestrator<P>>,
    pub status: InMemoryStatusService,
    pub controllers: FakeClusterControllerClient,
}

impl<P: Policy> World<P> {
    pub fn new(policy: P, apps: Vec<ApplicationInstance>) -> Self {
        Self::with_config(policy, apps, &OrchestratorConfig::default())
    }

    pub fn with_config(
        policy: P,
        apps: Vec<ApplicationInstance>,
        config: &OrchestratorConfig,
    ) -> Self {
        let status = InMemoryStatusService::new().with_lock_timeout(config.lock_timeout);
        let controllers = FakeClusterControllerClient::new();
        let orchestrator = Orchestrator::new(
            OrchestratorDeps {
                policy,
                lookup: StaticInstanceLookup::new(apps),
                status: status.clone(),
                cluster_controllers: TracedClusterControllerClient::new(controllers.clone()),
            },
            config,
        );
        Self {
            orchestrator: Arc::new(orchestrator),
            status,
            controllers,
        }
    }

    pub async fn status_of(&self, name: &str) -> HostStatus {
        self.orchestrator.node_status(&host(name)).await.unwrap()
    }
}
