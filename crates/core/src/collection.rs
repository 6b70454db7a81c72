//! Ordered collection that refuses identity duplicates.

use thiserror::Error;

/// Decides whether two values are "the same item" for uniqueness purposes.
///
/// This is deliberately separate from `PartialEq`: a value may be identical by
/// identity while differing in other fields.
pub trait Identity {
    fn same_identity(&self, other: &Self) -> bool;
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CollectionError {
    #[error("an item with the same identity already exists")]
    DuplicateItem,
    #[error("item not found")]
    ItemNotFound,
}

/// Insertion-ordered list in which no two items share identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identity> UniqueList<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if an item with the same identity is present.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Index of the item sharing identity with `item`, if any.
    #[must_use]
    pub fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|existing| existing.same_identity(item))
    }

    /// Append an item.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::DuplicateItem` if an identity-equal item exists.
    pub fn add(&mut self, item: T) -> Result<(), CollectionError> {
        if self.contains(&item) {
            return Err(CollectionError::DuplicateItem);
        }
        self.items.push(item);
        Ok(())
    }

    /// Replace `target` with `replacement`, keeping its position.
    ///
    /// `replacement` may share identity with `target` itself (an edit of
    /// non-identity fields), but not with any other item.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::ItemNotFound` if `target` is absent, or
    /// `CollectionError::DuplicateItem` if `replacement` collides with another item.
    pub fn set(&mut self, target: &T, replacement: T) -> Result<(), CollectionError> {
        let index = self.position(target).ok_or(CollectionError::ItemNotFound)?;
        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && existing.same_identity(&replacement));
        if collides {
            return Err(CollectionError::DuplicateItem);
        }
        self.items[index] = replacement;
        Ok(())
    }

    /// Remove the item sharing identity with `item` and return it.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::ItemNotFound` if absent.
    pub fn remove(&mut self, item: &T) -> Result<T, CollectionError> {
        let index = self.position(item).ok_or(CollectionError::ItemNotFound)?;
        Ok(self.items.remove(index))
    }

    /// Replace the whole contents. Nothing changes if `items` contains duplicates.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::DuplicateItem` if any two items share identity.
    pub fn replace_all(&mut self, items: Vec<T>) -> Result<(), CollectionError> {
        if !are_unique(&items) {
            return Err(CollectionError::DuplicateItem);
        }
        self.items = items;
        Ok(())
    }
}

impl<T> UniqueList<T> {
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Returns true if no two items in `items` share identity.
#[must_use]
pub fn are_unique<T: Identity>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(i, a)| items[i + 1..].iter().all(|b| !a.same_identity(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Identity is the key; the payload is ignored.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Keyed {
        key: u8,
        payload: u8,
    }

    impl Identity for Keyed {
        fn same_identity(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    fn k(key: u8, payload: u8) -> Keyed {
        Keyed { key, payload }
    }

    #[test]
    fn add_rejects_identity_duplicate_and_keeps_order() {
        let mut list = UniqueList::new();
        list.add(k(1, 0)).unwrap();
        list.add(k(2, 0)).unwrap();
        assert_eq!(list.add(k(1, 9)), Err(CollectionError::DuplicateItem));
        assert_eq!(list.as_slice(), &[k(1, 0), k(2, 0)]);
    }

    #[test]
    fn set_allows_editing_non_identity_fields_in_place() {
        let mut list = UniqueList::new();
        list.add(k(1, 0)).unwrap();
        list.add(k(2, 0)).unwrap();
        list.set(&k(1, 0), k(1, 5)).unwrap();
        assert_eq!(list.as_slice(), &[k(1, 5), k(2, 0)]);
    }

    #[test]
    fn set_rejects_collision_with_other_item() {
        let mut list = UniqueList::new();
        list.add(k(1, 0)).unwrap();
        list.add(k(2, 0)).unwrap();
        assert_eq!(list.set(&k(1, 0), k(2, 7)), Err(CollectionError::DuplicateItem));
        assert_eq!(list.set(&k(3, 0), k(4, 0)), Err(CollectionError::ItemNotFound));
        assert_eq!(list.as_slice(), &[k(1, 0), k(2, 0)]);
    }

    #[test]
    fn remove_missing_item_fails() {
        let mut list = UniqueList::new();
        list.add(k(1, 0)).unwrap();
        assert_eq!(list.remove(&k(2, 0)), Err(CollectionError::ItemNotFound));
        assert_eq!(list.remove(&k(1, 3)), Ok(k(1, 0)));
        assert!(list.is_empty());
    }

    #[test]
    fn replace_all_is_all_or_nothing() {
        let mut list = UniqueList::new();
        list.add(k(1, 0)).unwrap();
        let err = list.replace_all(vec![k(5, 0), k(6, 0), k(5, 1)]);
        assert_eq!(err, Err(CollectionError::DuplicateItem));
        assert_eq!(list.as_slice(), &[k(1, 0)]);

        list.replace_all(vec![k(5, 0), k(6, 0)]).unwrap();
        assert_eq!(list.len(), 2);
    }

    proptest! {
        #[test]
        fn adds_never_produce_identity_duplicates(ops in prop::collection::vec((0u8..8, any::<u8>()), 0..64)) {
            let mut list = UniqueList::new();
            for (key, payload) in ops {
                let before = list.clone();
                let item = k(key, payload);
                let existed = list.contains(&item);
                let result = list.add(item);
                if existed {
                    prop_assert_eq!(result, Err(CollectionError::DuplicateItem));
                    prop_assert_eq!(&list, &before);
                } else {
                    prop_assert!(result.is_ok());
                }
                prop_assert!(are_unique(list.as_slice()));
            }
        }
    }
}
