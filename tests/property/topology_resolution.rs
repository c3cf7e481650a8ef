// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Ring Resolution

use cim_infrastructure_cassandra::inventory::HostRecord;
use cim_infrastructure_cassandra::topology::TopologyResolver;
use proptest::prelude::*;

// ============================================================================
// Property Test Strategies
// ============================================================================

const TAGS: [&str; 5] = ["cassandra", "cassandra_a", "cassandra_b", "tagserve", "cassandra_"];

const ZONES: [&str; 4] = ["us-east-1a", "us-east-1b", "us-west-2a", "eu-west-1c"];

/// Role tags drawn from a small vocabulary so that overlaps are common
fn roles() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(TAGS.to_vec(), 0..=TAGS.len())
        .prop_map(|tags| tags.into_iter().map(String::from).collect())
}

/// Hosts with unique names and identifiers
fn hosts() -> impl Strategy<Value = Vec<HostRecord>> {
    prop::collection::vec((roles(), prop::sample::select(ZONES.to_vec())), 0..40).prop_map(
        |specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (roles, zone))| {
                    HostRecord::new(format!("host{:02}", i), roles, zone, format!("10.0.0.{}", i))
                        .with_id(i.to_string())
                })
                .collect()
        },
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: A host without the membership tag is in no ring
    #[test]
    fn prop_non_members_never_appear(hosts in hosts()) {
        let topology = TopologyResolver::default().resolve(&hosts);

        for host in hosts.iter().filter(|h| !h.has_role("cassandra")) {
            for ring in topology.rings() {
                prop_assert!(
                    topology.members_of(ring).all(|i| i.hostname != host.hostname),
                    "non-member {} found in ring {}",
                    host.hostname,
                    ring
                );
            }
        }
    }

    /// Property: A member tagged for a ring is in that ring, whatever else it is tagged for
    #[test]
    fn prop_members_appear_in_every_tagged_ring(hosts in hosts()) {
        let topology = TopologyResolver::default().resolve(&hosts);

        for host in hosts.iter().filter(|h| h.has_role("cassandra")) {
            for ring in ["a", "b"] {
                let tagged = host.has_role(&format!("cassandra_{}", ring));
                let present = topology.members_of(ring).any(|i| i.hostname == host.hostname);
                prop_assert_eq!(tagged, present, "host {} ring {}", &host.hostname, ring);
            }
        }
    }

    /// Property: Only rings named by some member's tags exist
    #[test]
    fn prop_no_empty_or_phantom_rings(hosts in hosts()) {
        let topology = TopologyResolver::default().resolve(&hosts);

        for ring in topology.rings() {
            prop_assert!(ring == "a" || ring == "b", "unexpected ring {:?}", ring);
            prop_assert!(topology.members_of(ring).count() > 0);
        }
    }

    /// Property: Resolution does not depend on inventory order
    #[test]
    fn prop_resolution_is_order_independent(
        (hosts, shuffled) in hosts().prop_flat_map(|h| (Just(h.clone()), Just(h).prop_shuffle()))
    ) {
        let resolver = TopologyResolver::default();
        prop_assert_eq!(resolver.resolve(&hosts), resolver.resolve(&shuffled));
    }
}
