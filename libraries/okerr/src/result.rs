// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! The `Result` sum type and its combinators.

use core::fmt;

use crate::error::{raise, ResultError};
use crate::iter::{Flat, IntoIter, Iter, IterMut};
use crate::option::{OptionFactory, OptionLike};

use self::Result::{Err, Ok};

type CoreResult<T, E> = core::result::Result<T, E>;

/// A value that is either a success (`Ok`) or a failure (`Err`).
///
/// A `Result` is immutable once built. Every combinator that changes the
/// payload consumes `self` and hands back a new `Result`; the ones that leave
/// it alone hand back the original value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
pub enum Result<T, E> {
    /// Success, holding a value.
    Ok(T),
    /// Failure, holding an error.
    Err(E),
}

impl<T, E> Result<T, E> {
    /////////////////////////////////////////////////////////////////////////
    // Querying the variant
    /////////////////////////////////////////////////////////////////////////

    /// Returns `true` if the result is `Ok`.
    pub const fn is_ok(&self) -> bool {
        matches!(*self, Ok(_))
    }

    /// Returns `true` if the result is `Err`.
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if the result is `Ok` and `f` accepts the value.
    ///
    /// `f` is not called for an `Err`.
    pub fn is_ok_and<F: FnOnce(T) -> bool>(self, f: F) -> bool {
        match self {
            Ok(v) => f(v),
            Err(_) => false,
        }
    }

    /// Returns `true` if the result is `Err` and `f` accepts the error.
    ///
    /// `f` is not called for an `Ok`.
    pub fn is_err_and<F: FnOnce(E) -> bool>(self, f: F) -> bool {
        match self {
            Ok(_) => false,
            Err(e) => f(e),
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Borrowing the payload
    /////////////////////////////////////////////////////////////////////////

    /// Converts from `&Result<T, E>` to `Result<&T, &E>`.
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match *self {
            Ok(ref v) => Ok(v),
            Err(ref e) => Err(e),
        }
    }

    /// Converts from `&mut Result<T, E>` to `Result<&mut T, &mut E>`.
    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match *self {
            Ok(ref mut v) => Ok(v),
            Err(ref mut e) => Err(e),
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Extracting the payload
    /////////////////////////////////////////////////////////////////////////

    /// Returns the `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics with [`ResultError::UnwrapOnErr`] if the result is `Err`. The
    /// message embeds the error.
    ///
    /// ```should_panic
    /// use okerr::{Err, Result};
    ///
    /// let r: Result<u32, &str> = Err("emergency failure");
    /// r.unwrap(); // panics with `called unwrap on an Err value: "emergency failure"`
    /// ```
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self.try_unwrap() {
            CoreResult::Ok(v) => v,
            CoreResult::Err(err) => raise(err),
        }
    }

    /// Returns the `Ok` value, or the violation `unwrap` would panic with.
    pub fn try_unwrap(self) -> CoreResult<T, ResultError>
    where
        E: fmt::Debug,
    {
        match self {
            Ok(v) => CoreResult::Ok(v),
            Err(e) => CoreResult::Err(ResultError::unwrap_on_err(&e)),
        }
    }

    /// Returns the `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics with [`ResultError::UnwrapOnErr`] if the result is `Err`. The
    /// message is `msg`, a colon, and the error as displayed by `Display`.
    ///
    /// ```should_panic
    /// use okerr::{Err, Result};
    ///
    /// let r: Result<u32, &str> = Err("error");
    /// r.expect("Custom message"); // panics with `Custom message: error`
    /// ```
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: fmt::Display,
    {
        match self.try_expect(msg) {
            CoreResult::Ok(v) => v,
            CoreResult::Err(err) => raise(err),
        }
    }

    /// Returns the `Ok` value, or the violation `expect` would panic with.
    pub fn try_expect(self, msg: &str) -> CoreResult<T, ResultError>
    where
        E: fmt::Display,
    {
        match self {
            Ok(v) => CoreResult::Ok(v),
            Err(e) => CoreResult::Err(ResultError::expect_on_err(msg, &e)),
        }
    }

    /// Returns the `Ok` value or `default`.
    ///
    /// `default` is evaluated eagerly. Use [`unwrap_or_else`] when it is
    /// expensive to build.
    ///
    /// [`unwrap_or_else`]: Result::unwrap_or_else
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Ok(v) => v,
            Err(_) => default,
        }
    }

    /// Returns the `Ok` value or computes one from the error.
    ///
    /// ```
    /// use okerr::{Err, Result};
    ///
    /// let r: Result<usize, &str> = Err("error");
    /// assert_eq!(r.unwrap_or_else(|e| e.len()), 5);
    /// ```
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, op: F) -> T {
        match self {
            Ok(v) => v,
            Err(e) => op(e),
        }
    }

    /// Returns the `Ok` value or `T::default()`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Ok(v) => v,
            Err(_) => T::default(),
        }
    }

    /// Returns the `Err` value.
    ///
    /// # Panics
    ///
    /// Panics with [`ResultError::UnwrapErrOnOk`] if the result is `Ok`.
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self.try_unwrap_err() {
            CoreResult::Ok(e) => e,
            CoreResult::Err(err) => raise(err),
        }
    }

    /// Returns the `Err` value, or the violation `unwrap_err` would panic
    /// with.
    pub fn try_unwrap_err(self) -> CoreResult<E, ResultError>
    where
        T: fmt::Debug,
    {
        match self {
            Ok(v) => CoreResult::Err(ResultError::unwrap_err_on_ok(&v)),
            Err(e) => CoreResult::Ok(e),
        }
    }

    /// Returns the `Err` value.
    ///
    /// # Panics
    ///
    /// Panics with [`ResultError::UnwrapErrOnOk`] if the result is `Ok`. The
    /// message is `msg`, a colon, and the value as displayed by `Display`.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E
    where
        T: fmt::Display,
    {
        match self.try_expect_err(msg) {
            CoreResult::Ok(e) => e,
            CoreResult::Err(err) => raise(err),
        }
    }

    /// Returns the `Err` value, or the violation `expect_err` would panic
    /// with.
    pub fn try_expect_err(self, msg: &str) -> CoreResult<E, ResultError>
    where
        T: fmt::Display,
    {
        match self {
            Ok(v) => CoreResult::Err(ResultError::expect_err_on_ok(msg, &v)),
            Err(e) => CoreResult::Ok(e),
        }
    }

    /// Returns the `Ok` value of a result that is known never to fail.
    ///
    /// # Panics
    ///
    /// Reaching an `Err` here is a logic error in the caller and panics with
    /// [`ResultError::UnreachableState`].
    #[track_caller]
    pub fn into_ok(self) -> T {
        match self.try_into_ok() {
            CoreResult::Ok(v) => v,
            CoreResult::Err(err) => raise(err),
        }
    }

    /// Returns the `Ok` value, or `UnreachableState` for an `Err`.
    pub fn try_into_ok(self) -> CoreResult<T, ResultError> {
        match self {
            Ok(v) => CoreResult::Ok(v),
            Err(_) => CoreResult::Err(ResultError::unreachable("into_ok", "Err")),
        }
    }

    /// Returns the `Err` value of a result that is known never to succeed.
    ///
    /// # Panics
    ///
    /// Reaching an `Ok` here is a logic error in the caller and panics with
    /// [`ResultError::UnreachableState`].
    #[track_caller]
    pub fn into_err(self) -> E {
        match self.try_into_err() {
            CoreResult::Ok(e) => e,
            CoreResult::Err(err) => raise(err),
        }
    }

    /// Returns the `Err` value, or `UnreachableState` for an `Ok`.
    pub fn try_into_err(self) -> CoreResult<E, ResultError> {
        match self {
            Ok(_) => CoreResult::Err(ResultError::unreachable("into_err", "Ok")),
            Err(e) => CoreResult::Ok(e),
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Transforming the payload
    /////////////////////////////////////////////////////////////////////////

    /// Maps an `Ok` value with `op`, leaving an `Err` untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, op: F) -> Result<U, E> {
        match self {
            Ok(v) => Ok(op(v)),
            Err(e) => Err(e),
        }
    }

    /// Maps an `Err` value with `op`, leaving an `Ok` untouched.
    pub fn map_err<F, O: FnOnce(E) -> F>(self, op: O) -> Result<T, F> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(op(e)),
        }
    }

    /// Applies `f` to an `Ok` value, or returns `default` for an `Err`.
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Ok(v) => f(v),
            Err(_) => default,
        }
    }

    /// Applies `f` to an `Ok` value, or `default` to an `Err` value.
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Ok(v) => f(v),
            Err(e) => default(e),
        }
    }

    /// Calls `f` with a reference to the `Ok` value, then returns the result
    /// unchanged.
    ///
    /// ```
    /// use okerr::{Ok, Result};
    ///
    /// let mut seen = 0;
    /// let r: Result<i32, ()> = Ok(4).inspect(|v| seen = *v);
    /// assert_eq!((r, seen), (Ok(4), 4));
    /// ```
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Ok(ref v) = self {
            f(v);
        }
        self
    }

    /// Calls `f` with a reference to the `Err` value, then returns the result
    /// unchanged.
    pub fn inspect_err<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }

    /// Dispatches on the variant: `on_ok` for a value, `on_err` for an error.
    ///
    /// This is the `match` operation of the API, named so it does not clash
    /// with the keyword.
    ///
    /// ```
    /// use okerr::{Err, Ok, Result};
    ///
    /// let describe = |r: Result<i32, &str>| r.match_with(|v| v * 2, |e| e.len() as i32);
    /// assert_eq!(describe(Ok(42)), 84);
    /// assert_eq!(describe(Err("e")), 1);
    /// ```
    pub fn match_with<U, F, G>(self, on_ok: F, on_err: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Ok(v) => on_ok(v),
            Err(e) => on_err(e),
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Combining results
    /////////////////////////////////////////////////////////////////////////

    /// Returns `res` if the result is `Ok`, otherwise the original `Err`.
    pub fn and<U>(self, res: Result<U, E>) -> Result<U, E> {
        match self {
            Ok(_) => res,
            Err(e) => Err(e),
        }
    }

    /// Calls `op` with the `Ok` value and returns what it produces. An `Err`
    /// is returned as is and `op` is not called.
    ///
    /// ```
    /// use okerr::{Err, Ok, Result};
    ///
    /// let double = |x: i32| -> Result<i32, &str> { Ok(x * 2) };
    /// assert_eq!(Ok(42).and_then(double), Ok(84));
    /// assert_eq!(Err("error").and_then(double), Err("error"));
    /// ```
    pub fn and_then<U, F: FnOnce(T) -> Result<U, E>>(self, op: F) -> Result<U, E> {
        match self {
            Ok(v) => op(v),
            Err(e) => Err(e),
        }
    }

    /// Returns the original `Ok`, otherwise `res`.
    pub fn or<F>(self, res: Result<T, F>) -> Result<T, F> {
        match self {
            Ok(v) => Ok(v),
            Err(_) => res,
        }
    }

    /// Calls `op` with the `Err` value and returns what it produces. An `Ok`
    /// is returned as is and `op` is not called.
    pub fn or_else<F, O: FnOnce(E) -> Result<T, F>>(self, op: O) -> Result<T, F> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => op(e),
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Iteration
    /////////////////////////////////////////////////////////////////////////

    /// Iterates over the `Ok` value: one item for `Ok`, none for `Err`.
    ///
    /// ```
    /// use okerr::{Err, Ok, Result};
    ///
    /// let r: Result<i32, &str> = Ok(42);
    /// assert_eq!(r.iter().collect::<Vec<_>>(), [&42]);
    ///
    /// let r: Result<i32, &str> = Err("error");
    /// assert_eq!(r.iter().count(), 0);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().into_core().ok())
    }

    /// Returns a mutable iterator over the `Ok` value, empty for an `Err`.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut().into_core().ok())
    }

    /// Iterates over the elements of an `Ok` value that is itself a
    /// collection. An `Err` yields nothing.
    ///
    /// ```
    /// use okerr::{Ok, Result};
    ///
    /// let r: Result<Vec<u8>, ()> = Ok(vec![1, 2, 3]);
    /// assert_eq!(r.iter_flat().sum::<u8>(), 6);
    /// ```
    pub fn iter_flat<'a>(&'a self) -> Flat<<&'a T as IntoIterator>::IntoIter>
    where
        &'a T: IntoIterator,
    {
        Flat::new(self.iter().next().map(IntoIterator::into_iter))
    }

    /////////////////////////////////////////////////////////////////////////
    // Optional values
    /////////////////////////////////////////////////////////////////////////

    /// Converts into the present case of `O` for an `Ok`, the absent case for
    /// an `Err`.
    ///
    /// ```
    /// use okerr::{Err, Ok, Result};
    ///
    /// let r: Result<i32, &str> = Ok(42);
    /// assert_eq!(r.ok::<Option<_>>(), Some(42));
    /// let r: Result<i32, &str> = Err("error");
    /// assert_eq!(r.ok::<Option<_>>(), None);
    /// ```
    pub fn ok<O: OptionLike<Item = T>>(self) -> O {
        match self {
            Ok(v) => O::some(v),
            Err(_) => O::none(),
        }
    }

    /// Converts into the present case of `O` for an `Err`, the absent case
    /// for an `Ok`.
    pub fn err<O: OptionLike<Item = E>>(self) -> O {
        match self {
            Ok(_) => O::none(),
            Err(e) => O::some(e),
        }
    }

    /// Like [`ok`](Result::ok), building the optional value through a
    /// factory that may fail.
    ///
    /// A factory failure is returned as [`ResultError::Construction`].
    pub fn ok_with<B: OptionFactory<T>>(self, factory: &B) -> CoreResult<B::Output, ResultError> {
        let built = match self {
            Ok(v) => factory.present(v),
            Err(_) => factory.absent(),
        };
        built.map_err(construction_failed)
    }

    /// Like [`err`](Result::err), building the optional value through a
    /// factory that may fail.
    pub fn err_with<B: OptionFactory<E>>(self, factory: &B) -> CoreResult<B::Output, ResultError> {
        let built = match self {
            Ok(_) => factory.absent(),
            Err(e) => factory.present(e),
        };
        built.map_err(construction_failed)
    }

    /////////////////////////////////////////////////////////////////////////
    // Conversions
    /////////////////////////////////////////////////////////////////////////

    /// Converts into the standard library result, e.g. to use `?`.
    pub fn into_core(self) -> CoreResult<T, E> {
        match self {
            Ok(v) => CoreResult::Ok(v),
            Err(e) => CoreResult::Err(e),
        }
    }
}

fn construction_failed<X: fmt::Display>(reason: X) -> ResultError {
    let err = ResultError::construction(reason);
    tracing::warn!(kind = err.kind(), "{}", err);
    err
}

impl<T, E> Result<Result<T, E>, E> {
    /// Removes one level of nesting from an `Ok` holding a `Result`.
    ///
    /// ```
    /// use okerr::{Err, Ok, Result};
    ///
    /// let nested: Result<Result<i32, &str>, &str> = Ok(Ok(42));
    /// assert_eq!(nested.flatten(), Ok(42));
    /// let nested: Result<Result<i32, &str>, &str> = Ok(Err("inner"));
    /// assert_eq!(nested.flatten(), Err("inner"));
    /// ```
    pub fn flatten(self) -> Result<T, E> {
        match self {
            Ok(inner) => inner,
            Err(e) => Err(e),
        }
    }
}

impl<T, E> Result<T, Result<T, E>> {
    /// Removes one level of nesting from an `Err` holding a `Result`.
    pub fn flatten_err(self) -> Result<T, E> {
        match self {
            Ok(v) => Ok(v),
            Err(inner) => inner,
        }
    }
}

impl<O: OptionLike, E> Result<O, E> {
    /// Swaps a result of an optional value into an optional result.
    ///
    /// - `Ok(none)` becomes the absent case of `P`.
    /// - `Ok(some(v))` becomes the present case of `P` holding `Ok(v)`.
    /// - `Err(e)` becomes the present case of `P` holding `Err(e)`.
    ///
    /// ```
    /// use okerr::{Err, Ok, Result};
    ///
    /// let r: Result<Option<i32>, &str> = Ok(Some(42));
    /// assert_eq!(r.transpose::<Option<_>>(), Some(Ok(42)));
    /// let r: Result<Option<i32>, &str> = Err("error");
    /// assert_eq!(r.transpose::<Option<_>>(), Some(Err("error")));
    /// ```
    pub fn transpose<P: OptionLike<Item = Result<O::Item, E>>>(self) -> P {
        match self {
            Ok(opt) => match opt.into_option() {
                Some(v) => P::some(Ok(v)),
                None => P::none(),
            },
            Err(e) => P::some(Err(e)),
        }
    }

    /// Like [`transpose`](Result::transpose), building the outer optional
    /// value through a factory that may fail.
    pub fn transpose_with<B>(self, factory: &B) -> CoreResult<B::Output, ResultError>
    where
        B: OptionFactory<Result<O::Item, E>>,
    {
        let built = match self {
            Ok(opt) => match opt.into_option() {
                Some(v) => factory.present(Ok(v)),
                None => factory.absent(),
            },
            Err(e) => factory.present(Err(e)),
        };
        built.map_err(construction_failed)
    }
}

impl<T: Copy, E> Result<&T, E> {
    /// Maps a `Result<&T, E>` to a `Result<T, E>` by copying the value.
    pub fn copied(self) -> Result<T, E> {
        self.map(|&v| v)
    }
}

impl<T: Clone, E> Result<&T, E> {
    /// Maps a `Result<&T, E>` to a `Result<T, E>` by cloning the value.
    pub fn cloned(self) -> Result<T, E> {
        self.map(Clone::clone)
    }
}

impl<T, E> From<CoreResult<T, E>> for Result<T, E> {
    fn from(res: CoreResult<T, E>) -> Self {
        match res {
            CoreResult::Ok(v) => Ok(v),
            CoreResult::Err(e) => Err(e),
        }
    }
}

impl<T, E> From<Result<T, E>> for CoreResult<T, E> {
    fn from(res: Result<T, E>) -> Self {
        res.into_core()
    }
}

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.into_core().ok())
    }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut Result<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// Collects an iterator of results, stopping at the first `Err`.
///
/// ```
/// use okerr::{Err, Ok, Result};
///
/// let all: Result<Vec<i32>, &str> = [Ok(1), Ok(2)].into_iter().collect();
/// assert_eq!(all, Ok(vec![1, 2]));
/// let first_err: Result<Vec<i32>, &str> = [Ok(1), Err("bad"), Err("worse")].into_iter().collect();
/// assert_eq!(first_err, Err("bad"));
/// ```
impl<A, E, V: FromIterator<A>> FromIterator<Result<A, E>> for Result<V, E> {
    fn from_iter<I: IntoIterator<Item = Result<A, E>>>(iter: I) -> Self {
        let mut error = None;
        let collected: V = iter
            .into_iter()
            .map_while(|res| match res {
                Ok(v) => Some(v),
                Err(e) => {
                    error = Some(e);
                    None
                }
            })
            .collect();
        match error {
            Some(e) => Err(e),
            None => Ok(collected),
        }
    }
}
