// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Seed Selection
//!
//! Every node computes its seed list independently, so the selection must be
//! a function of ring membership alone.

use std::collections::BTreeMap;

use cim_infrastructure_cassandra::domain::{CassandraInstance, CassandraRing};
use cim_infrastructure_cassandra::service::{PerDataCenterSeedSelector, SeedSelector};
use proptest::prelude::*;

const DATACENTERS: [&str; 3] = ["dc1", "dc2", "dc3"];

/// Instances with unique identifiers spread over a few datacenters
fn instances() -> impl Strategy<Value = Vec<CassandraInstance>> {
    prop::collection::btree_map(0i64..1000, prop::sample::select(DATACENTERS.to_vec()), 0..30)
        .prop_map(|members| {
            members
                .into_iter()
                .map(|(id, datacenter)| {
                    CassandraInstance::builder(id)
                        .datacenter(datacenter)
                        .public_ip_address(format!("10.{}.{}.{}", id / 256, id % 256, id % 7))
                        .build()
                })
                .collect()
        })
}

proptest! {
    /// Property: Seeds do not depend on the order instances were discovered in
    #[test]
    fn prop_seeds_are_deterministic(
        (members, shuffled) in instances().prop_flat_map(|m| (Just(m.clone()), Just(m).prop_shuffle())),
        count in 1usize..5,
    ) {
        let selector = PerDataCenterSeedSelector::new(count).unwrap();

        prop_assert_eq!(
            selector.select_seeds(&CassandraRing::new("ring", members)),
            selector.select_seeds(&CassandraRing::new("ring", shuffled))
        );
    }

    /// Property: Each datacenter contributes min(count, size) seeds, the lowest ids first
    #[test]
    fn prop_seeds_per_datacenter(members in instances(), count in 1usize..5) {
        let ring = CassandraRing::new("ring", members);
        let seeds = PerDataCenterSeedSelector::new(count).unwrap().select_seeds(&ring);

        let mut expected = Vec::new();
        let mut by_datacenter: BTreeMap<&str, Vec<&CassandraInstance>> = BTreeMap::new();
        for instance in ring.instances() {
            by_datacenter.entry(instance.datacenter.as_str()).or_default().push(instance);
        }
        for (_, mut group) in by_datacenter {
            group.sort_by(|a, b| a.id.cmp(&b.id));
            expected.extend(group.into_iter().take(count).map(|i| i.public_ip_address.clone()));
        }

        prop_assert_eq!(seeds.len(), expected.len());
        for ip in &expected {
            prop_assert!(seeds.contains(ip), "missing seed {}", ip);
        }
    }
}
