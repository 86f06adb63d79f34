// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! orch-core: shared model for the suspension orchestrator
//!
//! This crate provides:
//! - Identifiers for hosts, applications and clusters
//! - The application model (service clusters, instances, cluster controllers)
//! - Host and application suspension statuses
//! - Orchestrator configuration

pub mod application;
pub mod config;
pub mod controller;
pub mod id;
pub mod status;

pub use application::{ApplicationInstance, ServiceCluster, ServiceInstance, ServiceType};
pub use config::{ConfigError, LoggingConfig, OrchestratorConfig};
pub use controller::{ClusterControllerState, ClusterControllerStateResponse};
pub use id::{ApplicationId, ApplicationInstanceReference, ClusterId, ConfigId, HostName};
pub use status::{ApplicationInstanceStatus, HostStatus};
