//! Partition independence specs
//!
//! An operation holding one application's lock never delays operations on
//! another application, while operations on the same application wait.

use crate::prelude::*;
use similar_asserts::assert_eq;

fn slow_world() -> World<FakePolicy> {
    let world = World::new(
        FakePolicy::new(),
        vec![content_app("a", &["a1", "a2"]), content_app("b", &["b1", "b2"])],
    );
    world.controllers.set_delay(Duration::from_secs(5));
    world
}

async fn wait_until_locked(world: &World<FakePolicy>, app: &str) {
    while !world.status.is_locked(&reference(app)) {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn other_application_completes_while_slow_operation_in_flight() {
    let world = slow_world();

    let orchestrator = Arc::clone(&world.orchestrator);
    let slow = tokio::spawn(async move { orchestrator.suspend_application(&app_id("a")).await });
    wait_until_locked(&world, "a").await;

    world.orchestrator.suspend_host(&host("b1")).await.unwrap();
    world.orchestrator.resume_host(&host("b1")).await.unwrap();
    world.orchestrator.suspend_host(&host("b2")).await.unwrap();

    assert!(!slow.is_finished());
    assert!(world.status.is_locked(&reference("a")));
    assert_eq!(world.status_of("b2").await, HostStatus::AllowedToBeDown);

    slow.await.unwrap().unwrap();
    assert_eq!(
        world.status.application_instance_status(&reference("a")),
        ApplicationInstanceStatus::AllowedToBeDown
    );
}

#[tokio::test(start_paused = true)]
async fn same_application_waits_for_lock_holder() {
    let world = slow_world();

    let orchestrator = Arc::clone(&world.orchestrator);
    let slow = tokio::spawn(async move { orchestrator.suspend_application(&app_id("a")).await });
    wait_until_locked(&world, "a").await;

    let orchestrator = Arc::clone(&world.orchestrator);
    let waiting = tokio::spawn(async move { orchestrator.resume_host(&host("a1")).await });
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    assert!(!waiting.is_finished());

    slow.await.unwrap().unwrap();
    waiting.await.unwrap().unwrap();

    // The application is suspended, so the host stays down
    assert_eq!(world.status_of("a1").await, HostStatus::AllowedToBeDown);
}
