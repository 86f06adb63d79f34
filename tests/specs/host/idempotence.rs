//! Single-host idempotence specs
//!
//! A host already in the requested state is answered without consulting
//! the policy.

use crate::prelude::*;
use similar_asserts::assert_eq;

fn world() -> (World<FakePolicy>, FakePolicy) {
    let policy = FakePolicy::new();
    let world = World::new(policy.clone(), vec![content_app("a", &["a1", "a2"])]);
    (world, policy)
}

#[tokio::test]
async fn repeated_suspend_consults_policy_once() {
    let (world, policy) = world();

    for _ in 0..3 {
        world.orchestrator.suspend_host(&host("a1")).await.unwrap();
    }

    assert_eq!(policy.calls(), vec![PolicyCall::Grant { host: host("a1") }]);
    assert_eq!(world.status_of("a1").await, HostStatus::AllowedToBeDown);
}

#[tokio::test]
async fn repeated_resume_consults_policy_once() {
    let (world, policy) = world();
    world.orchestrator.suspend_host(&host("a1")).await.unwrap();
    policy.clear_calls();

    for _ in 0..3 {
        world.orchestrator.resume_host(&host("a1")).await.unwrap();
    }

    assert_eq!(policy.calls(), vec![PolicyCall::Release { host: host("a1") }]);
    assert_eq!(world.status_of("a1").await, HostStatus::NoRemarks);
}

#[tokio::test]
async fn short_circuit_skips_policy_that_would_deny() {
    let (world, policy) = world();
    world.orchestrator.suspend_host(&host("a2")).await.unwrap();
    policy.deny_suspend("a2");

    world.orchestrator.suspend_host(&host("a2")).await.unwrap();
}
