// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cassandra Topology Domain Models
//!
//! Value objects describing resolved cluster membership.
//!
//! - [`InstanceId`] - Identifier of an instance within a ring, totally ordered
//! - [`CassandraInstance`] - One member of a ring with its placement
//! - [`CassandraRing`] - A named ring and its members, unique by identifier
//! - [`ZoneConvention`] - Availability zone → datacenter/rack mapping
//!
//! Rings and instances are immutable snapshots; every query builds new ones.

pub mod instance;
pub mod ring;
pub mod zone;

pub use instance::{CassandraInstance, CassandraInstanceBuilder, InstanceId};
pub use ring::CassandraRing;
pub use zone::{Ec2Snitch, Placement, RegionZone, ZoneConvention, ZoneConventionKind};
