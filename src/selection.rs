use std::collections::{BTreeMap, BTreeSet};

/// Per-item choice map with overwrite semantics. Keys unique, insertion
/// order irrelevant; BTree backing keeps iteration deterministic.
#[derive(Debug, Clone, Default)]
pub struct ChoiceMap<K: Ord, V> {
    choices: BTreeMap<K, V>,
}

impl<K: Ord, V> ChoiceMap<K, V> {
    pub fn new() -> Self {
        Self {
            choices: BTreeMap::new(),
        }
    }

    /// Records a choice, replacing any prior one for the same item.
    pub fn assign(&mut self, id: K, choice: V) {
        self.choices.insert(id, choice);
    }

    pub fn get(&self, id: &K) -> Option<&V> {
        self.choices.get(id)
    }

    pub fn contains(&self, id: &K) -> bool {
        self.choices.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn clear(&mut self) {
        self.choices.clear();
    }
}

/// Set membership with toggle semantics.
#[derive(Debug, Clone, Default)]
pub struct ToggleSet<K: Ord> {
    members: BTreeSet<K>,
}

impl<K: Ord> ToggleSet<K> {
    pub fn new() -> Self {
        Self {
            members: BTreeSet::new(),
        }
    }

    /// Flips membership. Returns true if the id is a member afterwards.
    pub fn toggle(&mut self, id: K) -> bool {
        if self.members.remove(&id) {
            false
        } else {
            self.members.insert(id);
            true
        }
    }

    pub fn contains(&self, id: &K) -> bool {
        self.members.contains(id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.members.iter()
    }
}
