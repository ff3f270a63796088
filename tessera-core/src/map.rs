//! Key-value mapping constrained to one key type and one value type

use crate::error::{CoreError, CoreResult, Slot};
use std::any::Any;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt::Display;

/// Mapping with unique keys. Iteration follows key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstrainedMap<K: Ord, V> {
    entries: BTreeMap<K, V>,
}

impl<K: Ord, V> ConstrainedMap<K, V> {
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Names of the declared key and value types
    pub fn expected_types(&self) -> (&'static str, &'static str) {
        (std::any::type_name::<K>(), std::any::type_name::<V>())
    }

    /// Insert or overwrite, returning the previous value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.get_mut(key)
    }

    /// Get with default
    pub fn get_or<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        K: std::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.get(key).unwrap_or(default)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: std::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Value stored under `key`, created with `make` if absent.
    pub fn entry_or_insert_with<F>(&mut self, key: K, make: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.entries.entry(key).or_insert_with(make)
    }

    /// Delete `key`, failing if it is absent.
    pub fn remove<Q>(&mut self, key: &Q) -> CoreResult<V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Ord + Display + ?Sized,
    {
        self.entries
            .remove(key)
            .ok_or_else(|| CoreError::missing_key(key.to_string()))
    }

    pub fn take<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.remove(key)
    }

    pub fn keys(&self) -> btree_map::Keys<'_, K, V> {
        self.entries.keys()
    }

    pub fn values(&self) -> btree_map::Values<'_, K, V> {
        self.entries.values()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, K, V> {
        self.entries.iter_mut()
    }

    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.entries.retain(keep);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Ord + 'static, V: 'static> ConstrainedMap<K, V> {
    /// Build a map from type-erased pairs, failing on the first ill-typed
    /// key or value.
    pub fn try_from_any<I>(pairs: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (Box<dyn Any>, Box<dyn Any>)>,
    {
        let mut entries = BTreeMap::new();
        for (position, (key, value)) in pairs.into_iter().enumerate() {
            let (key, value) = check_pair::<K, V>(key, value, position)?;
            entries.insert(key, value);
        }
        Ok(Self { entries })
    }

    /// Checked assignment. Nothing is stored unless both key and value
    /// satisfy the declared types. A rejected pair is reported at position 0.
    pub fn insert_any(&mut self, key: Box<dyn Any>, value: Box<dyn Any>) -> CoreResult<Option<V>> {
        let (key, value) = check_pair::<K, V>(key, value, 0)?;
        Ok(self.entries.insert(key, value))
    }
}

fn check_pair<K: 'static, V: 'static>(
    key: Box<dyn Any>,
    value: Box<dyn Any>,
    position: usize,
) -> CoreResult<(K, V)> {
    let key = key
        .downcast::<K>()
        .map_err(|_| CoreError::type_constraint::<K>(Slot::Key, position))?;
    let value = value
        .downcast::<V>()
        .map_err(|_| CoreError::type_constraint::<V>(Slot::Value, position))?;
    Ok((*key, *value))
}

impl<K: Ord, V> Default for ConstrainedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for ConstrainedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl<K: Ord, V> Extend<(K, V)> for ConstrainedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<K: Ord, V> IntoIterator for ConstrainedMap<K, V> {
    type Item = (K, V);
    type IntoIter = btree_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a ConstrainedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = btree_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair<K: Any, V: Any>(key: K, value: V) -> (Box<dyn Any>, Box<dyn Any>) {
        (Box::new(key), Box::new(value))
    }

    #[test]
    fn test_insert_overwrites() {
        let mut map = ConstrainedMap::new();
        assert_eq!(map.insert("a".to_string(), 1), None);
        assert_eq!(map.insert("a".to_string(), 2), Some(1));
        assert_eq!(map.get("a"), Some(&2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_try_from_any_rejects_bad_key() {
        let err = ConstrainedMap::<String, i32>::try_from_any(vec![
            pair("a".to_string(), 1),
            pair(7_u8, 2),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::TypeConstraintViolation { slot: Slot::Key, position: 1, .. }
        ));
    }

    #[test]
    fn test_insert_any_rejection_leaves_map_unchanged() {
        let mut map: ConstrainedMap<String, i32> =
            [("a".to_string(), 1)].into_iter().collect();

        let err = map.insert_any(Box::new("b".to_string()), Box::new("two")).unwrap_err();
        assert!(matches!(err, CoreError::TypeConstraintViolation { slot: Slot::Value, .. }));
        assert!(!map.contains_key("b"));
        assert_eq!(map.len(), 1);

        let err = map.insert_any(Box::new(3_i64), Box::new(3)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::TypeConstraintViolation { slot: Slot::Key, position: 0, .. }
        ));

        map.insert_any(Box::new("b".to_string()), Box::new(2)).unwrap();
        assert_eq!(map.get("b"), Some(&2));
    }

    #[test]
    fn test_remove_missing_key() {
        let mut map: ConstrainedMap<String, i32> = ConstrainedMap::new();
        assert_eq!(map.remove("nope").unwrap_err(), CoreError::missing_key("nope"));
        map.insert("yes".to_string(), 1);
        assert_eq!(map.remove("yes").unwrap(), 1);
        assert!(map.is_empty());
    }

    #[test]
    fn test_get_or_default() {
        let map: ConstrainedMap<String, i32> = [("a".to_string(), 1)].into_iter().collect();
        let fallback = 0;
        assert_eq!(*map.get_or("a", &fallback), 1);
        assert_eq!(*map.get_or("z", &fallback), 0);
    }

    #[test]
    fn test_entry_or_insert_with_creates_once() {
        let mut map: ConstrainedMap<String, Vec<u8>> = ConstrainedMap::new();
        map.entry_or_insert_with("k".to_string(), Vec::new).push(1);
        map.entry_or_insert_with("k".to_string(), Vec::new).push(2);
        assert_eq!(map.get("k"), Some(&vec![1, 2]));
    }

    #[test]
    fn test_keys_are_ordered() {
        let map: ConstrainedMap<&str, u8> = [("b", 2), ("a", 1), ("c", 3)].into_iter().collect();
        let keys: Vec<&str> = map.keys().copied().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }
}
