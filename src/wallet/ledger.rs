use std::collections::HashMap;
use std::hash::Hash;

/// Append-only keyed store that remembers insertion order.
///
/// Records are never removed; they may be updated in place through [`Ledger::get_mut`].
#[derive(Debug)]
pub struct Ledger<K, V> {
    records: HashMap<K, V>,
    chron: Vec<K>,
}

impl<K, V> Default for Ledger<K, V> {
    fn default() -> Self {
        return Self {
            records: HashMap::new(),
            chron: Vec::new(),
        };
    }
}

impl<K, V> Ledger<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record under `key`. Returns `false`, leaving the ledger unchanged, when the
    /// key is already taken.
    pub fn append(&mut self, key: K, value: V) -> bool {
        if self.records.contains_key(&key) {
            return false;
        }

        self.chron.push(key.clone());
        self.records.insert(key, value);

        true
    }

    pub fn contains(&self, key: &K) -> bool {
        self.records.contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.records.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.records.get_mut(key)
    }

    /// Iterates records in the order they were appended
    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.chron.iter().filter_map(|key| self.records.get(key))
    }

    pub fn len(&self) -> usize {
        self.chron.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
