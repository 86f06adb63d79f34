// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Suspension status of hosts and application instances

use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-host suspension status
///
/// Absent entries read as [`HostStatus::NoRemarks`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HostStatus {
    #[default]
    NoRemarks,
    AllowedToBeDown,
}

impl fmt::Display for HostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostStatus::NoRemarks => write!(f, "NO_REMARKS"),
            HostStatus::AllowedToBeDown => write!(f, "ALLOWED_TO_BE_DOWN"),
        }
    }
}

/// Application-wide suspension status
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationInstanceStatus {
    #[default]
    NoRemarks,
    AllowedToBeDown,
}

impl fmt::Display for ApplicationInstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationInstanceStatus::NoRemarks => write!(f, "NO_REMARKS"),
            ApplicationInstanceStatus::AllowedToBeDown => write!(f, "ALLOWED_TO_BE_DOWN"),
        }
    }
}
