// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cassandra Instance Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an instance within its ring
///
/// Discovered hosts carry opaque string identifiers while the owned
/// attribute store uses integers, so both shapes are representable.
///
/// # Ordering
///
/// The derived ordering is the seed selection sort key and must be the same
/// on every node: numeric identifiers sort numerically and come before named
/// identifiers, which sort lexicographically.
///
/// ```rust
/// use cim_infrastructure_cassandra::domain::InstanceId;
///
/// assert!(InstanceId::from(2) < InstanceId::from(10));
/// assert!(InstanceId::from(10) < InstanceId::from("abc1"));
/// assert_eq!(InstanceId::parse("42"), InstanceId::Numeric(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InstanceId {
    Numeric(i64),
    Named(String),
}

impl InstanceId {
    /// Parse an identifier, preferring the integer form
    ///
    /// Only the canonical rendering of an integer is numeric, so distinct
    /// strings never collapse onto one identifier: `"01"`, `"+1"` and `" 1"`
    /// stay named.
    pub fn parse(value: &str) -> Self {
        match value.parse::<i64>() {
            Ok(n) if n.to_string() == value => InstanceId::Numeric(n),
            _ => InstanceId::Named(value.to_string()),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, InstanceId::Numeric(_))
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceId::Numeric(n) => write!(f, "{}", n),
            InstanceId::Named(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for InstanceId {
    fn from(value: i64) -> Self {
        InstanceId::Numeric(value)
    }
}

impl From<i32> for InstanceId {
    fn from(value: i32) -> Self {
        InstanceId::Numeric(i64::from(value))
    }
}

impl From<&str> for InstanceId {
    fn from(value: &str) -> Self {
        InstanceId::parse(value)
    }
}

impl From<String> for InstanceId {
    fn from(value: String) -> Self {
        InstanceId::parse(&value)
    }
}

/// A single member of a Cassandra ring
///
/// All string fields are always present; attributes missing from the source
/// are empty strings so persistence round-trips stay total. The bootstrap
/// token is absent unless explicitly assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CassandraInstance {
    pub id: InstanceId,
    pub datacenter: String,
    pub rack: String,
    pub hostname: String,
    pub public_ip_address: String,
    pub fully_qualified_domain_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<i128>,
}

impl CassandraInstance {
    /// Start building an instance with the given identifier
    pub fn builder(id: impl Into<InstanceId>) -> CassandraInstanceBuilder {
        CassandraInstanceBuilder::new(id)
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

/// Builder for [`CassandraInstance`]
#[derive(Debug, Clone)]
pub struct CassandraInstanceBuilder {
    instance: CassandraInstance,
}

impl CassandraInstanceBuilder {
    pub fn new(id: impl Into<InstanceId>) -> Self {
        Self {
            instance: CassandraInstance {
                id: id.into(),
                datacenter: String::new(),
                rack: String::new(),
                hostname: String::new(),
                public_ip_address: String::new(),
                fully_qualified_domain_name: String::new(),
                token: None,
            },
        }
    }

    pub fn id(mut self, id: impl Into<InstanceId>) -> Self {
        self.instance.id = id.into();
        self
    }

    pub fn datacenter(mut self, datacenter: impl Into<String>) -> Self {
        self.instance.datacenter = datacenter.into();
        self
    }

    pub fn rack(mut self, rack: impl Into<String>) -> Self {
        self.instance.rack = rack.into();
        self
    }

    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.instance.hostname = hostname.into();
        self
    }

    pub fn public_ip_address(mut self, address: impl Into<String>) -> Self {
        self.instance.public_ip_address = address.into();
        self
    }

    pub fn fully_qualified_domain_name(mut self, fqdn: impl Into<String>) -> Self {
        self.instance.fully_qualified_domain_name = fqdn.into();
        self
    }

    pub fn token(mut self, token: i128) -> Self {
        self.instance.token = Some(token);
        self
    }

    pub fn build(self) -> CassandraInstance {
        self.instance
    }
}
