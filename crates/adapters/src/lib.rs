// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the orchestrator's external collaborators

pub mod cluster;
pub mod lookup;
pub mod traced;

pub use cluster::{ClusterControllerClient, ClusterControllerError, NoOpClusterControllerClient};
pub use lookup::{InstanceLookup, StaticInstanceLookup};
pub use traced::TracedClusterControllerClient;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use cluster::{ClusterControllerCall, FakeClusterControllerClient};
