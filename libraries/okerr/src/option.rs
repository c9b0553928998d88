// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Interface to optional-value types built by `Result`.
//!
//! A `Result` can be turned into an optional value (`ok`, `err`) or swapped
//! with one (`transpose`). The concrete optional type belongs to the caller,
//! so this module only describes what `Result` needs from it:
//!
//! - [`OptionLike`] is the compile-time contract: a way to build the absent
//!   and present cases and a way to look inside. It is implemented for
//!   `core::option::Option`.
//! - [`OptionFactory`] is the runtime contract for construction that can
//!   fail. A factory error surfaces as
//!   [`ResultError::Construction`](crate::ResultError::Construction).

use core::convert::Infallible;
use core::fmt;
use core::marker::PhantomData;

/// A two-case type that either holds an `Item` or holds nothing.
pub trait OptionLike: Sized {
    type Item;

    /// Build the absent case.
    fn none() -> Self;

    /// Build the present case holding `item`.
    fn some(item: Self::Item) -> Self;

    /// Look inside, consuming `self`.
    fn into_option(self) -> Option<Self::Item>;
}

impl<T> OptionLike for Option<T> {
    type Item = T;

    fn none() -> Self {
        None
    }

    fn some(item: T) -> Self {
        Some(item)
    }

    fn into_option(self) -> Option<T> {
        self
    }
}

/// Builds optional values at run time, possibly failing.
///
/// `T` is the type of the value handed to [`present`](OptionFactory::present).
pub trait OptionFactory<T> {
    /// The optional type being built.
    type Output;
    /// Why construction failed.
    type Error: fmt::Display;

    /// Build the absent case.
    fn absent(&self) -> Result<Self::Output, Self::Error>;

    /// Build the present case wrapping `item`.
    fn present(&self, item: T) -> Result<Self::Output, Self::Error>;
}

/// A factory that builds `O` through its [`OptionLike`] implementation.
///
/// Construction through a `TypeFactory` cannot fail.
pub struct TypeFactory<O> {
    target: PhantomData<fn() -> O>,
}

impl<O> TypeFactory<O> {
    /// Create a factory for `O`.
    pub const fn new() -> TypeFactory<O> {
        TypeFactory {
            target: PhantomData,
        }
    }
}

impl<O> Default for TypeFactory<O> {
    fn default() -> Self {
        TypeFactory::new()
    }
}

impl<O: OptionLike> OptionFactory<O::Item> for TypeFactory<O> {
    type Output = O;
    type Error = Infallible;

    fn absent(&self) -> Result<O, Infallible> {
        Ok(O::none())
    }

    fn present(&self, item: O::Item) -> Result<O, Infallible> {
        Ok(O::some(item))
    }
}

/// A factory made of two caller-supplied constructors, one per case.
///
/// ```
/// use okerr::{FnFactory, Ok, Result};
///
/// type Built = core::result::Result<Option<i32>, &'static str>;
///
/// let factory = FnFactory::new(
///     || -> Built { core::result::Result::Ok(None) },
///     |v: i32| -> Built { core::result::Result::Ok(Some(v)) },
/// );
/// let r: Result<i32, &str> = Ok(3);
/// assert_eq!(r.ok_with(&factory).unwrap(), Some(3));
/// ```
pub struct FnFactory<N, S> {
    none: N,
    some: S,
}

impl<N, S> FnFactory<N, S> {
    /// Create a factory from the absent-case and present-case constructors.
    pub const fn new(none: N, some: S) -> FnFactory<N, S> {
        FnFactory { none, some }
    }
}

impl<T, O, X, N, S> OptionFactory<T> for FnFactory<N, S>
where
    X: fmt::Display,
    N: Fn() -> Result<O, X>,
    S: Fn(T) -> Result<O, X>,
{
    type Output = O;
    type Error = X;

    fn absent(&self) -> Result<O, X> {
        (self.none)()
    }

    fn present(&self, item: T) -> Result<O, X> {
        (self.some)(item)
    }
}
