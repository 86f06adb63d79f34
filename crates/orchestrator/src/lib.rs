// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Host and application suspension orchestrator
//!
//! The [`Orchestrator`] decides whether hosts may be taken down, using a
//! [`orch_policy::Policy`] for single-host decisions and an
//! [`orch_status::StatusService`] to record them under per-application locks.

mod batch;
mod error;
pub mod logging;
mod orchestrator;

#[cfg(test)]
mod test_fixtures;

pub use error::{ApplicationError, BatchError, BatchErrorKind, ErrorCategory, HostError};
pub use orchestrator::{Orchestrator, OrchestratorDeps};
