use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::hash::Hash;

/// A hash map that counts how often each key has been put.
///
/// Missing keys count as zero, so `count` never fails and `put` needs no
/// prior registration. Counts are signed so that merged maps built from
/// deltas still behave sensibly.
///
/// # Examples
/// ```
/// use classic_collections::CounterHashMap;
///
/// let mut words = CounterHashMap::new();
/// for w in ["the", "cat", "sat", "on", "the", "mat"] {
///     words.put(w);
/// }
/// assert_eq!(words.count("the"), 2);
/// assert_eq!(words.count("dog"), 0);
/// assert_eq!(words.sum_of_counts(), 6);
/// assert_eq!(words.max(), Some(&"the"));
/// ```
#[derive(Clone)]
pub struct CounterHashMap<K> {
    counts: HashMap<K, i64>,
}

impl<K: Eq + Hash> CounterHashMap<K> {
    /// Creates an empty counter.
    pub fn new() -> Self {
        CounterHashMap {
            counts: HashMap::new(),
        }
    }

    /// Increments the count of `key` by one, starting from zero for a key
    /// not seen before.
    pub fn put(&mut self, key: K) {
        self.put_n_times(key, 1);
    }

    /// Increments the count of `key` by `n`.
    pub fn put_n_times(&mut self, key: K, n: i64) {
        *self.counts.entry(key).or_insert(0) += n;
    }

    /// Returns the count recorded for `key`, or zero if the key was never
    /// put.
    pub fn count<Q>(&self, key: &Q) -> i64
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Returns the sum of all counts.
    pub fn sum_of_counts(&self) -> i64 {
        self.counts.values().sum()
    }

    /// Returns the key with the largest count, or `None` if the counter is
    /// empty.
    pub fn max(&self) -> Option<&K> {
        self.counts
            .iter()
            .max_by_key(|(_, &n)| n)
            .map(|(k, _)| k)
    }

    /// Returns the key with the largest count, but only if its share of the
    /// total exceeds `threshold` (a fraction in `0.0..=1.0`).
    pub fn max_with_threshold(&self, threshold: f64) -> Option<&K> {
        let total = self.sum_of_counts();
        self.counts
            .iter()
            .max_by_key(|(_, &n)| n)
            .filter(|(_, &n)| n as f64 / total as f64 > threshold)
            .map(|(k, _)| k)
    }

    /// Adds every count of `other` to this counter.
    pub fn add(&mut self, other: &CounterHashMap<K>)
    where
        K: Clone,
    {
        for (k, &n) in other.counts.iter() {
            self.put_n_times(k.clone(), n);
        }
    }

    /// Returns the `n` keys with the largest counts, descending by count.
    /// Ties are broken arbitrarily.
    pub fn top_n(&self, n: usize) -> Vec<(&K, i64)> {
        let mut all: Vec<_> =
            self.counts.iter().map(|(k, &c)| (k, c)).collect();
        all.sort_by(|a, b| b.1.cmp(&a.1));
        all.truncate(n);
        all
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no key has been put.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates the `(key, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, i64)> {
        self.counts.iter().map(|(k, &n)| (k, n))
    }
}

impl<K: Eq + Hash> Default for CounterHashMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> PartialEq for CounterHashMap<K> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<K: Eq + Hash> Eq for CounterHashMap<K> {}

impl<K: Debug> Debug for CounterHashMap<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.counts.iter()).finish()
    }
}

impl<K: Eq + Hash> FromIterator<K> for CounterHashMap<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut m = Self::new();
        for k in iter {
            m.put(k);
        }
        m
    }
}

#[cfg(feature = "serde")]
impl<K> serde::ser::Serialize for CounterHashMap<K>
where
    K: serde::ser::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_map(self.counts.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, K> serde::de::Deserialize<'de> for CounterHashMap<K>
where
    K: serde::de::Deserialize<'de> + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        struct MapVisitor<K> {
            marker: std::marker::PhantomData<K>,
        }

        impl<'de, K> serde::de::Visitor<'de> for MapVisitor<K>
        where
            K: serde::de::Deserialize<'de> + Eq + Hash,
        {
            type Value = CounterHashMap<K>;

            fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map from keys to counts")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut m = CounterHashMap::new();
                while let Some((k, n)) = map.next_entry()? {
                    m.put_n_times(k, n);
                }
                Ok(m)
            }
        }

        deserializer.deserialize_map(MapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate quickcheck;
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn put_counts_repeats() {
        let m: CounterHashMap<_> =
            ["item1", "item2", "item3", "item1", "item2", "item1"]
                .into_iter()
                .collect();
        assert_eq!(m.count("item1"), 3);
        assert_eq!(m.count("item2"), 2);
        assert_eq!(m.count("item3"), 1);
        assert_eq!(m.count("item4"), 0);
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn put_n_times_accumulates() {
        let mut m = CounterHashMap::new();
        m.put_n_times("item1", 2);
        m.put_n_times("item2", 3);
        m.put_n_times("item3", 6);
        m.put_n_times("item1", 2);
        m.put_n_times("item2", 3);
        m.put_n_times("item1", 2);
        assert_eq!(m.count("item1"), 6);
        assert_eq!(m.count("item2"), 6);
        assert_eq!(m.count("item3"), 6);
    }

    #[test]
    fn max_picks_most_frequent() {
        let m: CounterHashMap<_> =
            ["item1", "item2", "item3", "item1", "item2", "item1"]
                .into_iter()
                .collect();
        assert_eq!(m.max(), Some(&"item1"));
        assert_eq!(m.max_with_threshold(0.4), Some(&"item1"));
        assert_eq!(m.max_with_threshold(0.6), None);
        assert_eq!(CounterHashMap::<&str>::new().max(), None);
    }

    #[test]
    fn add_merges_counts() {
        let mut m1: CounterHashMap<_> =
            ["item1", "item2", "item3", "item1", "item2", "item1"]
                .into_iter()
                .collect();
        let mut m2 = CounterHashMap::new();
        m2.put_n_times("item1", 6);
        m2.put_n_times("item2", 6);
        m2.put_n_times("item3", 6);
        m1.add(&m2);
        assert_eq!(m1.count("item1"), 9);
        assert_eq!(m1.count("item2"), 8);
        assert_eq!(m1.count("item3"), 7);
    }

    #[test]
    fn top_n_is_descending() {
        let m: CounterHashMap<_> =
            ["item1", "item2", "item3", "item1", "item2", "item1"]
                .into_iter()
                .collect();
        assert_eq!(m.top_n(1), vec![(&"item1", 3)]);
        assert_eq!(m.top_n(2)[1], (&"item2", 2));
        assert_eq!(m.top_n(3)[2], (&"item3", 1));
        assert_eq!(m.top_n(9).len(), 3);
    }

    quickcheck! {
        fn qc_sum_matches_inserts(xs: Vec<u8>) -> () {
            let m: CounterHashMap<_> = xs.iter().copied().collect();
            assert_eq!(m.sum_of_counts(), xs.len() as i64);

            let total: i64 = (0..=u8::MAX).map(|k| m.count(&k)).sum();
            assert_eq!(total, xs.len() as i64);
        }
    }

    #[cfg(feature = "serde")]
    mod serde {
        use super::*;
        use serde_test::{assert_tokens, Token};

        #[test]
        fn tokens_round_trip() {
            let mut m = CounterHashMap::new();
            m.put_n_times("a", 4);
            assert_tokens(
                &m,
                &[
                    Token::Map { len: Some(1) },
                    Token::BorrowedStr("a"),
                    Token::I64(4),
                    Token::MapEnd,
                ],
            );
        }
    }
}
