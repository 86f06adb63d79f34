// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identifiers for hosts, applications and service clusters
//!
//! [`ApplicationInstanceReference`] is the partition key for all
//! application-scoped state. Its ordering is the ordering of its canonical
//! string form, which makes it usable as a cross-process sort key.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Name of a single machine or node
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HostName(pub String);

impl HostName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of a service cluster within an application
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClusterId(pub String);

impl ClusterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Config id of a single service instance, e.g. `admin/cluster-controllers/0`
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConfigId(pub String);

impl ConfigId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User-facing application identifier: `tenant:application:instance`
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApplicationId {
    pub tenant: String,
    pub application: String,
    pub instance: String,
}

impl ApplicationId {
    pub fn new(
        tenant: impl Into<String>,
        application: impl Into<String>,
        instance: impl Into<String>,
    ) -> Self {
        Self {
            tenant: tenant.into(),
            application: application.into(),
            instance: instance.into(),
        }
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.tenant, self.application, self.instance)
    }
}

/// Globally unique reference to one deployed application instance
///
/// The canonical form is `tenant:application:environment:region:instance`,
/// where everything after the tenant is the application instance id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationInstanceReference {
    pub tenant: String,
    pub application_instance_id: String,
}

impl ApplicationInstanceReference {
    pub fn new(tenant: impl Into<String>, application_instance_id: impl Into<String>) -> Self {
        Self {
            tenant: tenant.into(),
            application_instance_id: application_instance_id.into(),
        }
    }

    /// Build a reference from its parts
    pub fn from_parts(
        tenant: impl Into<String>,
        application: &str,
        environment: &str,
        region: &str,
        instance: &str,
    ) -> Self {
        Self::new(
            tenant,
            format!("{}:{}:{}:{}", application, environment, region, instance),
        )
    }

    /// Application name, the first segment of the instance id
    pub fn application_name(&self) -> &str {
        self.application_instance_id
            .split(':')
            .next()
            .unwrap_or_default()
    }

    /// Instance name, the last segment of the instance id
    pub fn instance_name(&self) -> &str {
        self.application_instance_id
            .rsplit(':')
            .next()
            .unwrap_or_default()
    }

    /// Whether this reference identifies a deployment of `id`
    pub fn matches(&self, id: &ApplicationId) -> bool {
        self.tenant == id.tenant
            && self.application_name() == id.application
            && self.instance_name() == id.instance
    }

    /// The user-facing id this reference was deployed as
    pub fn to_application_id(&self) -> ApplicationId {
        ApplicationId::new(
            self.tenant.clone(),
            self.application_name(),
            self.instance_name(),
        )
    }

    fn canonical_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.tenant
            .bytes()
            .chain(std::iter::once(b':'))
            .chain(self.application_instance_id.bytes())
    }
}

impl fmt::Display for ApplicationInstanceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.tenant, self.application_instance_id)
    }
}

impl Ord for ApplicationInstanceReference {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical_bytes().cmp(other.canonical_bytes())
    }
}

impl PartialOrd for ApplicationInstanceReference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
