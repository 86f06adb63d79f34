// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cluster controller state types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target state requested of a content cluster controller
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterControllerState {
    Up,
    Maintenance,
}

impl fmt::Display for ClusterControllerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterControllerState::Up => write!(f, "up"),
            ClusterControllerState::Maintenance => write!(f, "maintenance"),
        }
    }
}

/// Outcome reported by a cluster controller for a state change
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterControllerStateResponse {
    /// Whether the controller applied the requested state
    pub was_modified: bool,
    pub reason: String,
}

impl ClusterControllerStateResponse {
    pub fn applied() -> Self {
        Self {
            was_modified: true,
            reason: "ok".to_string(),
        }
    }

    pub fn refused(reason: impl Into<String>) -> Self {
        Self {
            was_modified: false,
            reason: reason.into(),
        }
    }
}
