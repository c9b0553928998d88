// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Iterators over the `Ok` payload of a `Result`.
//!
//! An `Err` always produces an empty iterator. Every call to `iter()` builds
//! a fresh iterator, so the sequence can be walked any number of times.

use core::iter::FusedIterator;

/// Iterator over a reference to the `Ok` payload.
///
/// Created by [`Result::iter`](crate::Result::iter).
#[derive(Clone, Debug)]
pub struct Iter<'a, T: 'a> {
    inner: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(inner: Option<&'a T>) -> Iter<'a, T> {
        Iter { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over a mutable reference to the `Ok` payload.
///
/// Created by [`Result::iter_mut`](crate::Result::iter_mut).
#[derive(Debug)]
pub struct IterMut<'a, T: 'a> {
    inner: Option<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(inner: Option<&'a mut T>) -> IterMut<'a, T> {
        IterMut { inner }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over the `Ok` payload.
///
/// Created by the `IntoIterator` implementation of `Result`.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(inner: Option<T>) -> IntoIter<T> {
        IntoIter { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// Iterator over the elements of an `Ok` payload that is itself a
/// collection.
///
/// Created by [`Result::iter_flat`](crate::Result::iter_flat). Yields nothing
/// for an `Err`.
#[derive(Clone, Debug)]
pub struct Flat<I> {
    inner: Option<I>,
}

impl<I> Flat<I> {
    pub(crate) fn new(inner: Option<I>) -> Flat<I> {
        Flat { inner }
    }
}

impl<I: Iterator> Iterator for Flat<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.inner.as_mut()?.next() {
            Some(item) => Some(item),
            None => {
                // Drop the exhausted iterator so we stay fused.
                self.inner = None;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(iter) => iter.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<I: Iterator> FusedIterator for Flat<I> {}
