// Copyright (c) 2025 - Cowboy AI, Inc.
//! Availability Zone → Datacenter/Rack Conventions
//!
//! The inventory only records an availability zone per host (for example
//! `us-east-1a`). Cassandra needs a datacenter and a rack, so a zone
//! convention maps one to the other. Every node must apply the same
//! convention or they will disagree about datacenter membership and
//! therefore about seeds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::errors::TopologyError;

/// Datacenter and rack derived from a zone
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Placement {
    pub datacenter: String,
    pub rack: String,
}

impl Placement {
    pub fn new(datacenter: impl Into<String>, rack: impl Into<String>) -> Self {
        Self {
            datacenter: datacenter.into(),
            rack: rack.into(),
        }
    }
}

/// Maps an availability zone string onto a [`Placement`]
///
/// Implementations must be total: any string, including an empty or
/// unrecognised one, yields a placement.
pub trait ZoneConvention: Send + Sync {
    fn place(&self, zone: &str) -> Placement;
}

impl<F> ZoneConvention for F
where
    F: Fn(&str) -> Placement + Send + Sync,
{
    fn place(&self, zone: &str) -> Placement {
        self(zone)
    }
}

/// Split a zone into its region and trailing zone letter, if it has one
///
/// A zone letter is an ASCII letter directly preceded by a digit.
fn split_zone_letter(zone: &str) -> Option<(&str, char)> {
    let mut chars = zone.chars().rev();
    let letter = chars.next()?;
    let before = chars.next()?;
    if letter.is_ascii_alphabetic() && before.is_ascii_digit() {
        Some((&zone[..zone.len() - 1], letter))
    } else {
        None
    }
}

/// Region is the datacenter, zone letter is the rack
///
/// `us-east-1a` → datacenter `us-east-1`, rack `a`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionZone;

impl ZoneConvention for RegionZone {
    fn place(&self, zone: &str) -> Placement {
        let zone = zone.trim();
        match split_zone_letter(zone) {
            Some((region, letter)) => Placement::new(region, letter.to_string()),
            None => Placement::new(zone, ""),
        }
    }
}

/// The naming used by Cassandra's `Ec2Snitch`
///
/// The rack is the last dash-separated part of the zone and the datacenter is
/// the region with a `-1` suffix dropped: `us-east-1a` → `us-east`/`1a`,
/// `us-west-2a` → `us-west-2`/`2a`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ec2Snitch;

impl ZoneConvention for Ec2Snitch {
    fn place(&self, zone: &str) -> Placement {
        let zone = zone.trim();
        let Some((region, _)) = split_zone_letter(zone) else {
            return Placement::new(zone, "");
        };
        let rack = zone.rsplit('-').next().unwrap_or(zone);
        let datacenter = region.strip_suffix("-1").unwrap_or(region);
        Placement::new(datacenter, rack)
    }
}

/// Named zone conventions selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoneConventionKind {
    #[default]
    RegionZone,
    Ec2Snitch,
}

impl ZoneConventionKind {
    pub fn convention(self) -> Arc<dyn ZoneConvention> {
        match self {
            ZoneConventionKind::RegionZone => Arc::new(RegionZone),
            ZoneConventionKind::Ec2Snitch => Arc::new(Ec2Snitch),
        }
    }
}

impl fmt::Display for ZoneConventionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneConventionKind::RegionZone => write!(f, "region-zone"),
            ZoneConventionKind::Ec2Snitch => write!(f, "ec2-snitch"),
        }
    }
}

impl FromStr for ZoneConventionKind {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "region-zone" | "region_zone" => Ok(ZoneConventionKind::RegionZone),
            "ec2-snitch" | "ec2_snitch" | "ec2snitch" => Ok(ZoneConventionKind::Ec2Snitch),
            other => Err(TopologyError::Configuration(format!(
                "unknown zone convention: {}",
                other
            ))),
        }
    }
}
