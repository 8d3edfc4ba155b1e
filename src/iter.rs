use core::iter::FusedIterator;

use crate::core::DynVec;

/// Iterator over the live elements of a `DynVec`, front to back.
pub struct DynVecIter<'a, T> {
    items: &'a [T],
    current: usize,
}

impl<'a, T> DynVecIter<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self { items, current: 0 }
    }
}

impl<T> Clone for DynVecIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            current: self.current,
        }
    }
}

impl<'a, T> Iterator for DynVecIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.current)?;
        self.current += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.current;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for DynVecIter<'_, T> {}

impl<T> FusedIterator for DynVecIter<'_, T> {}

/// Iterator yielding mutable references to the live elements of a `DynVec`.
pub struct DynVecIterMut<'a, T> {
    inner: core::slice::IterMut<'a, T>,
}

impl<'a, T> DynVecIterMut<'a, T> {
    pub(crate) fn new(items: &'a mut [T]) -> Self {
        Self {
            inner: items.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for DynVecIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for DynVecIterMut<'_, T> {}

impl<T> FusedIterator for DynVecIterMut<'_, T> {}

impl<'a, T> IntoIterator for &'a DynVec<T> {
    type Item = &'a T;
    type IntoIter = DynVecIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynVec<T> {
    type Item = &'a mut T;
    type IntoIter = DynVecIterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
