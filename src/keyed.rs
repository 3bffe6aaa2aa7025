use std::cmp::Ordering;
use std::fmt;

/// An order key tagged with the identity it was created under.
///
/// Equality and ordering look at the key only, so sorting a `Vec<Keyed<K>>` orders by key and
/// the ids show where each element started. Displayed as `[id, key]`.
#[derive(Debug, Clone)]
pub struct Keyed<K> {
    id: usize,
    key: K,
}

impl<K> Keyed<K> {
    pub fn new(id: usize, key: K) -> Self {
        Self { id, key }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn into_key(self) -> K {
        self.key
    }
}

impl<K: PartialEq> PartialEq for Keyed<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq> Eq for Keyed<K> {}

impl<K: Ord> PartialOrd for Keyed<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for Keyed<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K: fmt::Display> fmt::Display for Keyed<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.id, self.key)
    }
}

/// Hands out consecutive ids in creation order.
///
/// Each generator counts on its own. Two generators started at the same value produce the same
/// ids.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    next: usize,
}

impl IdGenerator {
    /// Starts counting at 0.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(first: usize) -> Self {
        Self { next: first }
    }

    pub fn next_id(&mut self) -> usize {
        let id = self.next;
        self.next += 1;
        id
    }

    pub fn wrap<K>(&mut self, key: K) -> Keyed<K> {
        Keyed::new(self.next_id(), key)
    }

    /// Wraps every key, ids follow iteration order.
    pub fn wrap_all<K, I>(&mut self, keys: I) -> Vec<Keyed<K>>
    where
        I: IntoIterator<Item = K>,
    {
        keys.into_iter().map(|key| self.wrap(key)).collect()
    }
}
