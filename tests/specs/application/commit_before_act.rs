//! Application suspension specs
//!
//! Hosts are marked down before the cluster controllers are asked to enter
//! maintenance. A controller failure leaves them down and the application
//! status untouched.

use crate::prelude::*;
use similar_asserts::assert_eq;

fn world() -> World<FakePolicy> {
    World::new(
        FakePolicy::new(),
        vec![content_app("a", &["a1", "a2", "a3"]), content_app("b", &["b1"])],
    )
}

#[tokio::test]
async fn refused_maintenance_keeps_hosts_down() {
    let world = world();
    world.controllers.refuse("a", "cluster is not stable");

    let error = world
        .orchestrator
        .suspend_application(&app_id("a"))
        .await
        .unwrap_err();

    assert_eq!(error.category(), ErrorCategory::PermissionDenied);
    assert!(
        error
            .to_string()
            .contains("cluster a to cluster state maintenance due to: cluster is not stable"),
        "error: {}",
        error
    );
    for name in ["a1", "a2", "a3", "a-cc"] {
        assert_eq!(world.status_of(name).await, HostStatus::AllowedToBeDown);
    }
    assert_eq!(
        world
            .orchestrator
            .application_instance_status(&app_id("a"))
            .await
            .unwrap(),
        ApplicationInstanceStatus::NoRemarks
    );
    assert_eq!(world.status_of("b1").await, HostStatus::NoRemarks);
}

#[tokio::test]
async fn unreachable_controller_is_a_denial() {
    let world = world();
    world.controllers.fail("a", "connection reset");

    let error = world
        .orchestrator
        .suspend_application(&app_id("a"))
        .await
        .unwrap_err();

    assert!(matches!(error, ApplicationError::Denied(_)));
    assert!(error.to_string().contains("connection reset"), "error: {}", error);
    assert_eq!(world.status_of("a1").await, HostStatus::AllowedToBeDown);
}

#[tokio::test]
async fn resuming_each_host_repairs_partial_failure() {
    let world = world();
    world.controllers.refuse("a", "busy");
    world
        .orchestrator
        .suspend_application(&app_id("a"))
        .await
        .unwrap_err();

    for name in ["a1", "a2", "a3", "a-cc"] {
        world.orchestrator.resume_host(&host(name)).await.unwrap();
        assert_eq!(world.status_of(name).await, HostStatus::NoRemarks);
    }
}

#[tokio::test]
async fn application_without_controllers_cannot_enter_maintenance() {
    let orphan = ApplicationInstance::new(reference("orphan"))
        .with_cluster(ServiceCluster::new("orphan", "searchnode").with_instance("orphan/0", "o1"));
    let world = World::new(FakePolicy::new(), vec![orphan]);

    let error = world
        .orchestrator
        .suspend_application(&app_id("orphan"))
        .await
        .unwrap_err();

    assert!(
        error.to_string().contains("no cluster controllers"),
        "error: {}",
        error
    );
    assert!(world.controllers.calls().is_empty());
}

#[tokio::test]
async fn successful_suspension_drives_only_content_clusters() {
    let app = content_app("a", &["a1"])
        .with_cluster(ServiceCluster::new("web", "container").with_instance("web/0", "w1"));
    let world = World::new(FakePolicy::new(), vec![app]);

    world
        .orchestrator
        .suspend_application(&app_id("a"))
        .await
        .unwrap();

    let clusters: Vec<String> = world
        .controllers
        .calls()
        .iter()
        .map(|call| call.cluster.to_string())
        .collect();
    assert_eq!(clusters, vec!["a".to_string()]);
    assert_eq!(world.status_of("w1").await, HostStatus::AllowedToBeDown);
    assert_eq!(
        world
            .orchestrator
            .all_suspended_applications()
            .into_iter()
            .collect::<Vec<_>>(),
        vec![app_id("a")]
    );
}
