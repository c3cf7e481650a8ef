// Copyright (c) 2025 - Cowboy AI, Inc.
//! Role tag classification
//!
//! Inventory roles are free-form strings. Only two shapes matter here:
//!
//! - the generic membership tag (`cassandra`), marking a host as a Cassandra
//!   node at all
//! - ring tags, the ring prefix followed by a ring name (`cassandra_myring`)
//!
//! Every other tag is [`RoleTag::Other`] and is ignored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::errors::{TopologyError, TopologyResult};

fn default_membership_tag() -> String {
    "cassandra".to_string()
}

fn default_ring_prefix() -> String {
    "cassandra_".to_string()
}

/// Recognised shapes of a role tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleTag<'a> {
    /// The generic cluster membership tag
    Membership,
    /// A ring qualifier, carrying the ring name
    Ring(&'a str),
    /// Anything else
    Other(&'a str),
}

/// What a host's tags say about its cluster membership
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostTags<'a> {
    pub member: bool,
    pub rings: BTreeSet<&'a str>,
}

impl<'a> HostTags<'a> {
    /// Rings the host belongs to; empty unless the membership tag is present
    pub fn member_rings(&self) -> Vec<&'a str> {
        if self.member {
            self.rings.iter().copied().collect()
        } else {
            Vec::new()
        }
    }
}

/// The tag strings that encode ring membership
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagConvention {
    #[serde(default = "default_membership_tag")]
    pub membership_tag: String,

    #[serde(default = "default_ring_prefix")]
    pub ring_prefix: String,
}

impl Default for TagConvention {
    fn default() -> Self {
        Self {
            membership_tag: default_membership_tag(),
            ring_prefix: default_ring_prefix(),
        }
    }
}

impl TagConvention {
    pub fn new(membership_tag: impl Into<String>, ring_prefix: impl Into<String>) -> Self {
        Self {
            membership_tag: membership_tag.into(),
            ring_prefix: ring_prefix.into(),
        }
    }

    pub fn validate(&self) -> TopologyResult<()> {
        if self.membership_tag.is_empty() {
            return Err(TopologyError::Configuration(
                "membership tag must not be empty".to_string(),
            ));
        }
        if self.ring_prefix.is_empty() {
            return Err(TopologyError::Configuration(
                "ring tag prefix must not be empty".to_string(),
            ));
        }
        if self.ring_prefix == self.membership_tag {
            return Err(TopologyError::Configuration(format!(
                "ring tag prefix must differ from the membership tag: {}",
                self.ring_prefix
            )));
        }
        Ok(())
    }

    /// Classify a single tag
    ///
    /// A tag equal to the prefix alone names no ring and is `Other`.
    pub fn classify<'a>(&self, tag: &'a str) -> RoleTag<'a> {
        if tag == self.membership_tag {
            return RoleTag::Membership;
        }
        match tag.strip_prefix(self.ring_prefix.as_str()) {
            Some(ring) if !ring.is_empty() => RoleTag::Ring(ring),
            _ => RoleTag::Other(tag),
        }
    }

    /// Classify all tags of a host
    pub fn inspect<'a>(&self, roles: &'a [String]) -> HostTags<'a> {
        roles
            .iter()
            .fold(HostTags::default(), |mut tags, role| {
                match self.classify(role) {
                    RoleTag::Membership => tags.member = true,
                    RoleTag::Ring(ring) => {
                        tags.rings.insert(ring);
                    }
                    RoleTag::Other(_) => {}
                }
                tags
            })
    }

    /// The tag that places a host in `ring`
    pub fn ring_tag(&self, ring: &str) -> String {
        format!("{}{}", self.ring_prefix, ring)
    }
}
