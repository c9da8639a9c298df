//! Host state mapping — `entity-id → snapshot`, in the host's order.
//!
//! Iteration order is the order in which the host supplied the entries
//! (insertion order, or document order when decoded from JSON/TOML). Nothing
//! here sorts: "first" always means first as the host presented it.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::entity::EntitySnapshot;
use crate::id::EntityId;

/// Ordered mapping from entity id to its current snapshot.
///
/// `index` maps each id to its position in `entries`; entries are never
/// removed, so positions stay valid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HostStates {
    entries: Vec<(EntityId, EntitySnapshot)>,
    index: HashMap<EntityId, usize>,
}

impl HostStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the snapshot for `id`.
    ///
    /// Replacing keeps the entry's original position.
    pub fn insert(&mut self, id: impl Into<EntityId>, snapshot: EntitySnapshot) {
        let id = id.into();
        if let Some(&position) = self.index.get(&id) {
            self.entries[position].1 = snapshot;
        } else {
            self.index.insert(id.clone(), self.entries.len());
            self.entries.push((id, snapshot));
        }
    }

    /// Look up the snapshot for `id`.
    #[must_use]
    pub fn get(&self, id: &EntityId) -> Option<&EntitySnapshot> {
        self.index.get(id).map(|&position| &self.entries[position].1)
    }

    /// Mutable lookup of the snapshot for `id`.
    pub fn get_mut(&mut self, id: &EntityId) -> Option<&mut EntitySnapshot> {
        let position = *self.index.get(id)?;
        Some(&mut self.entries[position].1)
    }

    /// Entity identifiers in host order.
    pub fn ids(&self) -> impl Iterator<Item = &EntityId> {
        self.entries.iter().map(|(id, _)| id)
    }

    /// `(id, snapshot)` pairs in host order.
    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &EntitySnapshot)> {
        self.entries.iter().map(|entry| (&entry.0, &entry.1))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<I: Into<EntityId>> FromIterator<(I, EntitySnapshot)> for HostStates {
    fn from_iter<T: IntoIterator<Item = (I, EntitySnapshot)>>(iter: T) -> Self {
        let mut states = Self::new();
        for (id, snapshot) in iter {
            states.insert(id, snapshot);
        }
        states
    }
}

impl Serialize for HostStates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, snapshot) in &self.entries {
            map.serialize_entry(id, snapshot)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for HostStates {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HostStatesVisitor;

        impl<'de> Visitor<'de> for HostStatesVisitor {
            type Value = HostStates;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of entity id to entity state")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut states = HostStates::new();
                while let Some((id, snapshot)) = access.next_entry::<EntityId, EntitySnapshot>()? {
                    states.insert(id, snapshot);
                }
                Ok(states)
            }
        }

        deserializer.deserialize_map(HostStatesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityState;

    #[test]
    fn should_preserve_insertion_order() {
        let states: HostStates = [
            ("switch.c", EntitySnapshot::new("on")),
            ("light.a", EntitySnapshot::new("off")),
            ("switch.b", EntitySnapshot::new("off")),
        ]
        .into_iter()
        .collect();
        let ids: Vec<&str> = states.ids().map(EntityId::as_str).collect();
        assert_eq!(ids, vec!["switch.c", "light.a", "switch.b"]);
    }

    #[test]
    fn should_preserve_document_order_when_decoding() {
        let json = r#"{"switch.z": {"state": "on"}, "switch.a": {"state": "off"}}"#;
        let states: HostStates = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = states.ids().map(EntityId::as_str).collect();
        assert_eq!(ids, vec!["switch.z", "switch.a"]);
    }

    #[test]
    fn should_replace_in_place_on_reinsert() {
        let mut states = HostStates::new();
        states.insert("switch.a", EntitySnapshot::new("off"));
        states.insert("switch.b", EntitySnapshot::new("off"));
        states.insert("switch.a", EntitySnapshot::new("on"));

        assert_eq!(states.len(), 2);
        assert_eq!(states.ids().next().map(EntityId::as_str), Some("switch.a"));
        let a = states.get(&EntityId::new("switch.a")).unwrap();
        assert_eq!(a.state, EntityState::On);
    }

    #[test]
    fn should_iterate_pairs_in_order() {
        let states: HostStates = [
            ("switch.b", EntitySnapshot::new("on")),
            ("switch.a", EntitySnapshot::new("off")),
        ]
        .into_iter()
        .collect();
        let pairs: Vec<(&str, &str)> = states
            .iter()
            .map(|(id, snapshot)| (id.as_str(), snapshot.state.as_str()))
            .collect();
        assert_eq!(pairs, vec![("switch.b", "on"), ("switch.a", "off")]);
    }

    #[test]
    fn should_decode_large_mapping_with_indexed_lookup() {
        let json = format!(
            "{{{}}}",
            (0..20_000)
                .map(|i| format!(r#""switch.s{i}": {{"state": "off"}}"#))
                .collect::<Vec<_>>()
                .join(",")
        );
        let mut states: HostStates = serde_json::from_str(&json).unwrap();

        assert_eq!(states.len(), 20_000);
        assert_eq!(states.ids().next().map(EntityId::as_str), Some("switch.s0"));
        assert_eq!(
            states.ids().last().map(EntityId::as_str),
            Some("switch.s19999")
        );

        let last = EntityId::new("switch.s19999");
        states.get_mut(&last).unwrap().state = EntityState::On;
        assert_eq!(states.get(&last).unwrap().state, EntityState::On);
        assert!(states.get(&EntityId::new("switch.s20000")).is_none());
    }

    #[test]
    fn should_compare_equal_regardless_of_how_built() {
        let mut built = HostStates::new();
        built.insert("switch.a", EntitySnapshot::new("on"));
        built.insert("switch.b", EntitySnapshot::new("off"));
        let decoded: HostStates =
            serde_json::from_str(r#"{"switch.a": {"state": "on"}, "switch.b": {"state": "off"}}"#)
                .unwrap();
        assert_eq!(built, decoded);
    }

    #[test]
    fn should_return_none_for_unknown_entity() {
        let states = HostStates::new();
        assert!(states.get(&EntityId::new("switch.missing")).is_none());
        assert!(states.is_empty());
    }
}
