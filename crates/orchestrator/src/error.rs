// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for orchestrator operations

use orch_core::{ApplicationId, HostName};
use orch_policy::HostStateChangeDenied;
use orch_status::StatusError;
use std::fmt;
use thiserror::Error;

/// Coarse classification shared by every orchestrator error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A host or application identifier could not be resolved
    NotFound,
    /// A policy or cluster controller refused the change
    PermissionDenied,
    /// A collaborator failed unexpectedly
    Internal,
}

/// Errors from single-host operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("host {0} not found")]
    NotFound(HostName),
    #[error(transparent)]
    Denied(#[from] HostStateChangeDenied),
    #[error("internal error: {0}")]
    Internal(String),
}

impl HostError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HostError::NotFound(_) => ErrorCategory::NotFound,
            HostError::Denied(_) => ErrorCategory::PermissionDenied,
            HostError::Internal(_) => ErrorCategory::Internal,
        }
    }
}

impl From<StatusError> for HostError {
    fn from(e: StatusError) -> Self {
        HostError::Internal(e.to_string())
    }
}

/// Errors from application-wide operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error("application {0} not found")]
    NotFound(ApplicationId),
    #[error("application state change denied: {0}")]
    Denied(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApplicationError::NotFound(_) => ErrorCategory::NotFound,
            ApplicationError::Denied(_) => ErrorCategory::PermissionDenied,
            ApplicationError::Internal(_) => ErrorCategory::Internal,
        }
    }
}

impl From<StatusError> for ApplicationError {
    fn from(e: StatusError) -> Self {
        ApplicationError::Internal(e.to_string())
    }
}

/// What made a batch suspension fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatchErrorKind {
    HostNameNotFound,
    HostStateChangeDenied,
    InternalError,
}

impl From<&HostError> for BatchErrorKind {
    fn from(cause: &HostError) -> Self {
        match cause {
            HostError::NotFound(_) => BatchErrorKind::HostNameNotFound,
            HostError::Denied(_) => BatchErrorKind::HostStateChangeDenied,
            HostError::Internal(_) => BatchErrorKind::InternalError,
        }
    }
}

impl fmt::Display for BatchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchErrorKind::HostNameNotFound => write!(f, "host not found"),
            BatchErrorKind::HostStateChangeDenied => write!(f, "denied"),
            BatchErrorKind::InternalError => write!(f, "internal error"),
        }
    }
}

/// Failure of a batch suspension, after rollback
///
/// `cause` is always the failure that stopped the batch. Failures of the
/// compensating resumes are collected in `suppressed`, in rollback order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to suspend [{}] of parent {parent} ({kind}): {cause}", join_hosts(.hosts))]
pub struct BatchError {
    pub parent: HostName,
    /// Every host of the request, as requested
    pub hosts: Vec<HostName>,
    pub kind: BatchErrorKind,
    #[source]
    pub cause: HostError,
    pub suppressed: Vec<HostError>,
}

impl BatchError {
    pub fn new(parent: HostName, hosts: Vec<HostName>, cause: HostError) -> Self {
        Self {
            parent,
            hosts,
            kind: BatchErrorKind::from(&cause),
            cause,
            suppressed: Vec::new(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.cause.category()
    }
}

fn join_hosts(hosts: &[HostName]) -> String {
    hosts
        .iter()
        .map(HostName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
