//! Batch starvation specs
//!
//! Two batches contend for hosts of two applications where only one host
//! per application may be down. Because both batches sort their hosts the
//! same way, one of them always wins.

use crate::prelude::*;
use similar_asserts::assert_eq;

fn world() -> World<SuspensionLimitPolicy> {
    World::new(
        SuspensionLimitPolicy::new(1),
        vec![content_app("a", &["a1", "a2"]), content_app("b", &["b1", "b2"])],
    )
}

#[tokio::test]
async fn lock_step_without_ordering_fails_both() {
    let world = world();
    let o = &world.orchestrator;

    // Unsorted lock-step: [a1, b1] against [b2, a2]
    o.suspend_host(&host("a1")).await.unwrap();
    o.suspend_host(&host("b2")).await.unwrap();
    assert!(o.suspend_host(&host("b1")).await.is_err());
    assert!(o.suspend_host(&host("a2")).await.is_err());
}

#[tokio::test]
async fn both_batches_try_the_smaller_application_first() {
    let world = world();

    let first = world
        .orchestrator
        .sort_host_names_for_suspend(&hosts(&["a1", "b1"]))
        .await
        .unwrap();
    let second = world
        .orchestrator
        .sort_host_names_for_suspend(&hosts(&["b2", "a2"]))
        .await
        .unwrap();

    assert_eq!(first, hosts(&["a1", "b1"]));
    assert_eq!(second, hosts(&["a2", "b2"]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_batches_always_let_one_succeed() {
    for _ in 0..20 {
        let world = world();

        let orchestrator = Arc::clone(&world.orchestrator);
        let first = tokio::spawn(async move {
            orchestrator
                .suspend_all(&host("host1"), hosts(&["a1", "b1"]))
                .await
        });
        let orchestrator = Arc::clone(&world.orchestrator);
        let second = tokio::spawn(async move {
            orchestrator
                .suspend_all(&host("host2"), hosts(&["b2", "a2"]))
                .await
        });

        let first = first.await.unwrap();
        let second = second.await.unwrap();

        let (winner, loser) = match (&first, &second) {
            (Ok(()), Err(e)) => (["a1", "b1"], e),
            (Err(e), Ok(())) => (["a2", "b2"], e),
            other => panic!("exactly one batch should succeed, got {:?}", other),
        };
        assert_eq!(loser.kind, BatchErrorKind::HostStateChangeDenied);
        // The loser is denied on its first host, so nothing is rolled back
        assert!(loser.suppressed.is_empty());
        for name in winner {
            assert_eq!(world.status_of(name).await, HostStatus::AllowedToBeDown);
        }
    }
}
