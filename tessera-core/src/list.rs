//! Ordered sequence constrained to one element type
//!
//! The element type is a generic parameter, so ordinary insertion is checked
//! by the compiler. Values arriving type-erased (`Box<dyn Any>`) go through
//! the `*_any` methods, which downcast every candidate before touching the
//! stored items.

use crate::error::{CoreError, CoreResult, Slot};
use std::any::Any;
use std::ops::{Bound, Deref, Index, IndexMut, RangeBounds};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstrainedList<T> {
    items: Vec<T>,
}

impl<T> ConstrainedList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Name of the declared element type
    pub fn expected_type(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn insert(&mut self, index: usize, item: T) -> CoreResult<()> {
        if index > self.items.len() {
            return Err(self.out_of_range(index));
        }
        self.items.insert(index, item);
        Ok(())
    }

    /// Replace the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, item: T) -> CoreResult<T> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(CoreError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, item))
    }

    /// Replace the elements in `range` with `items` (slice assignment).
    /// Returns the removed elements.
    pub fn splice<R, I>(&mut self, range: R, items: I) -> CoreResult<Vec<T>>
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        let (start, end) = self.resolve(range)?;
        Ok(self.items.splice(start..end, items).collect())
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn remove_at(&mut self, index: usize) -> CoreResult<T> {
        if index >= self.items.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.items.remove(index))
    }

    /// Remove the first element matching `predicate`.
    pub fn remove_first<P>(&mut self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let index = self.items.iter().position(predicate)?;
        Some(self.items.remove(index))
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    fn out_of_range(&self, index: usize) -> CoreError {
        CoreError::IndexOutOfRange { index, len: self.items.len() }
    }

    fn resolve<R: RangeBounds<usize>>(&self, range: R) -> CoreResult<(usize, usize)> {
        let len = self.items.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s
                .checked_add(1)
                .ok_or(CoreError::IndexOutOfRange { index: usize::MAX, len })?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e
                .checked_add(1)
                .ok_or(CoreError::IndexOutOfRange { index: usize::MAX, len })?,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        };
        if end > len {
            return Err(CoreError::IndexOutOfRange { index: end, len });
        }
        if start > end {
            return Err(CoreError::IndexOutOfRange { index: start, len });
        }
        Ok((start, end))
    }
}

impl<T: PartialEq> ConstrainedList<T> {
    pub fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|x| x == item)
    }

    /// Remove the first element equal to `item`.
    pub fn remove_item(&mut self, item: &T) -> CoreResult<T> {
        match self.position(item) {
            Some(index) => Ok(self.items.remove(index)),
            None => Err(CoreError::ItemNotFound { expected: self.expected_type() }),
        }
    }
}

impl<T: 'static> ConstrainedList<T> {
    /// Build a list from type-erased values, failing on the first value that
    /// is not a `T`.
    pub fn try_from_any<I>(values: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = Box<dyn Any>>,
    {
        let items = values
            .into_iter()
            .enumerate()
            .map(|(position, value)| downcast::<T>(value, position))
            .collect::<CoreResult<Vec<T>>>()?;
        Ok(Self { items })
    }

    pub fn push_any(&mut self, value: Box<dyn Any>) -> CoreResult<()> {
        let item = downcast::<T>(value, self.items.len())?;
        self.items.push(item);
        Ok(())
    }

    pub fn insert_any(&mut self, index: usize, value: Box<dyn Any>) -> CoreResult<()> {
        if index > self.items.len() {
            return Err(self.out_of_range(index));
        }
        let item = downcast::<T>(value, index)?;
        self.items.insert(index, item);
        Ok(())
    }

    /// Append every value, or none of them if any fails its check.
    pub fn extend_any<I>(&mut self, values: I) -> CoreResult<()>
    where
        I: IntoIterator<Item = Box<dyn Any>>,
    {
        let offset = self.items.len();
        let checked = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| downcast::<T>(value, offset + i))
            .collect::<CoreResult<Vec<T>>>()?;
        self.items.extend(checked);
        Ok(())
    }

    pub fn set_any(&mut self, index: usize, value: Box<dyn Any>) -> CoreResult<T> {
        if index >= self.items.len() {
            return Err(self.out_of_range(index));
        }
        let item = downcast::<T>(value, index)?;
        self.set(index, item)
    }
}

fn downcast<T: 'static>(value: Box<dyn Any>, position: usize) -> CoreResult<T> {
    value
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| CoreError::type_constraint::<T>(Slot::Element, position))
}

impl<T> Default for ConstrainedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for ConstrainedList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Index<usize> for ConstrainedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for ConstrainedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> FromIterator<T> for ConstrainedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for ConstrainedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> From<Vec<T>> for ConstrainedList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> IntoIterator for ConstrainedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ConstrainedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ConstrainedList<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
