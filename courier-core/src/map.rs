//! A chained hash map that doubles its bucket array when it fills up.
//!
//! [`ExpandableMap`] is the index the router uses to find the search node
//! for a coordinate, and the store the street map uses for adjacency lists.
//! Hashing is pluggable through [`BuildHasher`]; keys supply the hashed bytes
//! through their [`Hash`] implementation.
//!
//! The map never removes single entries. It can only be [`reset`] as a
//! whole, and it is not `Clone`: a map is moved, never shared between two
//! owners.
//!
//! [`reset`]: ExpandableMap::reset

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::mem;

/// Number of buckets in a new or reset map.
pub const INITIAL_BUCKETS: usize = 8;

/// Load factor used when the caller supplies a non-positive value.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.5;

/// Key→value store with separate chaining and full rehash on growth.
///
/// Growth happens after an insertion pushes `len` above
/// `max_load_factor × bucket_count`: the bucket array doubles and every
/// association is moved to the bucket chosen by its unchanged hash modulo the
/// new bucket count.
///
/// # Examples
/// ```
/// use courier_core::ExpandableMap;
///
/// let mut map = ExpandableMap::new();
/// assert_eq!(map.associate("depot", 1), None);
/// assert_eq!(map.associate("depot", 2), Some(1));
/// assert_eq!(map.find("depot"), Some(&2));
/// assert_eq!(map.len(), 1);
/// ```
pub struct ExpandableMap<K, V, S = RandomState> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
    max_load_factor: f64,
    hasher: S,
}

impl<K, V> ExpandableMap<K, V, RandomState> {
    /// Create an empty map with the default load factor.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_load_factor(DEFAULT_MAX_LOAD_FACTOR)
    }

    /// Create an empty map that grows once `len > max_load_factor × buckets`.
    ///
    /// Non-positive and non-finite factors fall back to
    /// [`DEFAULT_MAX_LOAD_FACTOR`].
    ///
    /// # Examples
    /// ```
    /// use courier_core::ExpandableMap;
    ///
    /// let map: ExpandableMap<u32, u32> = ExpandableMap::with_max_load_factor(-1.0);
    /// assert!((map.max_load_factor() - 0.5).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn with_max_load_factor(max_load_factor: f64) -> Self {
        Self::with_hasher(max_load_factor, RandomState::new())
    }
}

impl<K, V, S> ExpandableMap<K, V, S> {
    /// Create an empty map using `hasher` to place keys in buckets.
    pub fn with_hasher(max_load_factor: f64, hasher: S) -> Self {
        let max_load_factor = if max_load_factor.is_finite() && max_load_factor > 0.0 {
            max_load_factor
        } else {
            DEFAULT_MAX_LOAD_FACTOR
        };
        Self {
            buckets: empty_buckets(INITIAL_BUCKETS),
            len: 0,
            max_load_factor,
            hasher,
        }
    }

    /// Number of distinct keys.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the map holds no associations.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current size of the bucket array.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Load factor above which the bucket array doubles.
    #[must_use]
    pub const fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Drop every association and shrink back to [`INITIAL_BUCKETS`].
    pub fn reset(&mut self) {
        self.buckets = empty_buckets(INITIAL_BUCKETS);
        self.len = 0;
    }

    /// Iterate over all associations in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flatten()
            .map(|(key, value)| (key, value))
    }
}

impl<K, V, S> ExpandableMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Associate `value` with `key`, returning the value it replaced.
    ///
    /// A new key may trigger growth; overwriting an existing key never does.
    pub fn associate(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];
        if let Some((_, slot)) = bucket.iter_mut().find(|(existing, _)| *existing == key) {
            return Some(mem::replace(slot, value));
        }
        bucket.push((key, value));
        self.len += 1;
        if self.exceeds_load() {
            self.grow();
        }
        None
    }

    /// Look up the value associated with `key`.
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.len == 0 {
            return None;
        }
        self.buckets
            .get(self.bucket_index(key))?
            .iter()
            .find(|(existing, _)| existing.borrow() == key)
            .map(|(_, value)| value)
    }

    /// Look up a mutable reference to the value associated with `key`.
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.len == 0 {
            return None;
        }
        let index = self.bucket_index(key);
        self.buckets
            .get_mut(index)?
            .iter_mut()
            .find(|(existing, _)| existing.borrow() == key)
            .map(|(_, value)| value)
    }

    /// Whether `key` has an association.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        // The bucket count always fits in u64 and the remainder is below it.
        let buckets = self.buckets.len() as u64;
        (self.hasher.hash_one(key) % buckets) as usize
    }

    fn exceeds_load(&self) -> bool {
        self.len as f64 > self.max_load_factor * self.buckets.len() as f64
    }

    fn grow(&mut self) {
        let doubled = self.buckets.len() * 2;
        let previous = mem::replace(&mut self.buckets, empty_buckets(doubled));
        for (key, value) in previous.into_iter().flatten() {
            let index = self.bucket_index(&key);
            self.buckets[index].push((key, value));
        }
    }
}

impl<K, V, S: Default> Default for ExpandableMap<K, V, S> {
    fn default() -> Self {
        Self::with_hasher(DEFAULT_MAX_LOAD_FACTOR, S::default())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ExpandableMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

fn empty_buckets<K, V>(count: usize) -> Vec<Vec<(K, V)>> {
    std::iter::repeat_with(Vec::new).take(count).collect()
}
