// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cassandra Ring View

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::{CassandraInstance, InstanceId};

/// A named Cassandra cluster and its members
///
/// A ring has no identity beyond its name and member set. Members are unique
/// by [`InstanceId`]; adding a second instance with the same identifier
/// replaces the first. Iteration is always in identifier order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CassandraRing {
    name: String,
    instances: BTreeMap<InstanceId, CassandraInstance>,
}

impl CassandraRing {
    pub fn new(
        name: impl Into<String>,
        instances: impl IntoIterator<Item = CassandraInstance>,
    ) -> Self {
        Self {
            name: name.into(),
            instances: instances
                .into_iter()
                .map(|instance| (instance.id.clone(), instance))
                .collect(),
        }
    }

    /// A ring with no members
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, std::iter::empty())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in ascending identifier order
    pub fn instances(&self) -> impl Iterator<Item = &CassandraInstance> {
        self.instances.values()
    }

    pub fn instance(&self, id: &InstanceId) -> Option<&CassandraInstance> {
        self.instances.get(id)
    }

    pub fn contains(&self, id: &InstanceId) -> bool {
        self.instances.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Distinct datacenter names of the members
    pub fn datacenters(&self) -> BTreeSet<&str> {
        self.instances
            .values()
            .map(|instance| instance.datacenter.as_str())
            .collect()
    }

    /// Members of one datacenter, in identifier order
    pub fn instances_in<'a>(
        &'a self,
        datacenter: &'a str,
    ) -> impl Iterator<Item = &'a CassandraInstance> + 'a {
        self.instances
            .values()
            .filter(move |instance| instance.datacenter == datacenter)
    }
}

impl Serialize for CassandraRing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let instances: Vec<&CassandraInstance> = self.instances.values().collect();
        let mut state = serializer.serialize_struct("CassandraRing", 2)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("instances", &instances)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(id: i64, dc: &str) -> CassandraInstance {
        CassandraInstance::builder(id).datacenter(dc).build()
    }

    #[test]
    fn test_members_unique_by_id() {
        let ring = CassandraRing::new(
            "myring",
            vec![
                instance(1, "dc1"),
                instance(2, "dc1"),
                instance(1, "dc2"),
            ],
        );

        assert_eq!(ring.len(), 2);
        assert_eq!(ring.instance(&InstanceId::Numeric(1)).unwrap().datacenter, "dc2");
    }

    #[test]
    fn test_iteration_is_identifier_ordered() {
        let ring = CassandraRing::new(
            "myring",
            vec![instance(3, "dc1"), instance(1, "dc2"), instance(2, "dc1")],
        );

        let ids: Vec<_> = ring.instances().map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec![InstanceId::Numeric(1), InstanceId::Numeric(2), InstanceId::Numeric(3)]);
    }

    #[test]
    fn test_datacenter_partition() {
        let ring = CassandraRing::new(
            "myring",
            vec![instance(1, "dc1"), instance(2, "dc2"), instance(3, "dc1")],
        );

        assert_eq!(ring.datacenters().into_iter().collect::<Vec<_>>(), vec!["dc1", "dc2"]);
        assert_eq!(ring.instances_in("dc1").count(), 2);
        assert_eq!(ring.instances_in("dc3").count(), 0);
    }

    #[test]
    fn test_empty_ring() {
        let ring = CassandraRing::empty("nothing");
        assert!(ring.is_empty());
        assert_eq!(ring.name(), "nothing");
        assert!(ring.datacenters().is_empty());
    }

    #[test]
    fn test_ring_serialization() {
        let ring = CassandraRing::new("stats", vec![instance(2, "dc1"), instance(1, "dc1")]);
        let json = serde_json::to_value(&ring).unwrap();

        assert_eq!(json["name"], "stats");
        assert_eq!(json["instances"][0]["id"], 1);
        assert_eq!(json["instances"][1]["id"], 2);
    }
}
