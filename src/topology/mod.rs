// Copyright (c) 2025 - Cowboy AI, Inc.
//! Ring topology resolution
//!
//! - [`TagConvention`] - Which role tags mean "Cassandra node" and "member of ring X"
//! - [`TopologyResolver`] - Hosts → per-ring membership
//! - [`Topology`] - One resolved snapshot

pub mod resolver;
pub mod tags;

pub use resolver::{Topology, TopologyResolver};
pub use tags::{HostTags, RoleTag, TagConvention};
