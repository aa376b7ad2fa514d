use std::borrow::Borrow;
use std::collections::{HashMap, VecDeque};
use std::fmt::{Debug, Formatter};
use std::hash::Hash;

/// A fixed-capacity cache that evicts the least recently used entry.
///
/// Both `get` and `add` refresh an entry's recency. When an `add` would grow
/// the cache past its capacity, the entry that has gone unused the longest is
/// dropped to make room.
///
/// Recency is tracked in a deque of keys ordered oldest-first; refreshing an
/// entry moves its key to the back. That makes `get` O(n) in the worst case,
/// which is fine for the small, bounded caches this type is meant for.
///
/// # Examples
/// ```
/// use classic_collections::LruCache;
///
/// let mut cache = LruCache::new(2);
/// cache.add("a", 1);
/// cache.add("b", 2);
/// cache.get(&"a");          // refresh "a"; "b" is now the oldest
/// cache.add("c", 3);        // evicts "b"
/// assert!(cache.contains(&"a"));
/// assert!(!cache.contains(&"b"));
/// assert!(cache.contains(&"c"));
/// ```
#[derive(Clone)]
pub struct LruCache<K, V> {
    capacity: usize,
    map: HashMap<K, V>,
    // keys ordered oldest-first; every map key appears exactly once
    recency: VecDeque<K>,
}

impl<K: Clone + Eq + Hash, V> LruCache<K, V> {
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "cache capacity must be at least 1");
        LruCache {
            capacity,
            map: HashMap::new(),
            recency: VecDeque::new(),
        }
    }

    /// Returns true if `key` is cached. Does not refresh recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Returns the cached value for `key` and marks it as the most recently
    /// used entry.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        if !self.map.contains_key(key) {
            return None;
        }
        self.touch(key);
        self.map.get(key)
    }

    /// Inserts or replaces the value for `key` and marks it as the most
    /// recently used entry, evicting the least recently used one if the
    /// cache is full.
    pub fn add(&mut self, key: K, value: V) {
        if self.map.contains_key(&key) {
            self.touch(&key);
            self.map.insert(key, value);
            return;
        }

        if self.map.len() == self.capacity {
            if let Some(oldest) = self.recency.pop_front() {
                self.map.remove(&oldest);
            }
        }

        self.recency.push_back(key.clone());
        self.map.insert(key, value);
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the fixed capacity the cache was created with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // move key to the most-recent end of the recency order
    fn touch<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        if let Some(pos) = self.recency.iter().position(|k| k.borrow() == key) {
            let k = self.recency.remove(pos).unwrap();
            self.recency.push_back(k);
        }
    }
}

impl<K: Debug + Eq + Hash, V: Debug> Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_cached_entries() {
        let mut cache = LruCache::new(50000);
        cache.add("item1", "1");
        cache.add("item2", "2");
        cache.add("item3", "3");
        assert!(cache.contains(&"item2"));
        assert!(!cache.contains(&"item4"));
        assert_eq!(cache.get(&"item1"), Some(&"1"));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = LruCache::new(3);
        cache.add(1, 'a');
        cache.add(2, 'b');
        cache.add(3, 'c');

        // 1 is the oldest; refreshing it makes 2 the eviction candidate
        cache.get(&1);
        cache.add(4, 'd');

        assert!(cache.contains(&1));
        assert!(!cache.contains(&2));
        assert!(cache.contains(&3));
        assert!(cache.contains(&4));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn add_refreshes_existing_key() {
        let mut cache = LruCache::new(2);
        cache.add(1, 'a');
        cache.add(2, 'b');
        cache.add(1, 'z');
        cache.add(3, 'c');

        assert_eq!(cache.get(&1), Some(&'z'));
        assert!(!cache.contains(&2));
        assert!(cache.contains(&3));
    }

    #[test]
    fn lookups_accept_borrowed_keys() {
        // owned String keys, &str probes
        let mut cache = LruCache::new(2);
        cache.add("alpha".to_string(), 1);
        cache.add("beta".to_string(), 2);

        assert!(cache.contains("alpha"));
        assert_eq!(cache.get("alpha"), Some(&1));

        // the &str get refreshed "alpha", so "beta" is evicted
        cache.add("gamma".to_string(), 3);
        assert!(cache.contains("alpha"));
        assert!(!cache.contains("beta"));
        assert!(cache.contains("gamma"));
    }

    #[test]
    fn stays_within_capacity() {
        let mut cache = LruCache::new(100);
        for i in 0..10000 {
            cache.add(i, i);
        }
        assert_eq!(cache.len(), 100);
        for i in 9900..10000 {
            assert!(cache.contains(&i));
        }
        assert!(!cache.contains(&0));
    }
}
