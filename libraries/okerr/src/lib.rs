// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! An algebraic `Ok`/`Err` result type.
//!
//! [`Result`] is a value that is exactly one of a success case (`Ok` holding a
//! `T`) or a failure case (`Err` holding an `E`), together with combinators for
//! transforming, inspecting and extracting the payload without branching by
//! hand.
//!
//! Operations that can only succeed on one variant (`unwrap`, `expect`,
//! `into_ok`, ...) panic when called on the other one. Each of them has a
//! `try_` twin that reports the same condition as a [`ResultError`] instead.
//!
//! Conversion into optional values goes through the [`OptionLike`] trait (for
//! the type-parameter forms such as [`Result::ok`]) or an [`OptionFactory`]
//! (for the fallible runtime forms such as [`Result::ok_with`]).
//!
//! ```
//! use okerr::{Err, Ok, Result};
//!
//! let doubled: Result<i32, &str> = Ok(42).map(|x| x * 2);
//! assert_eq!(doubled.unwrap(), 84);
//!
//! let renamed: Result<i32, String> = Err("error").map_err(|e| format!("new {}", e));
//! assert_eq!(renamed.unwrap_err(), "new error");
//! ```

#![no_std]

extern crate alloc;

mod config;
pub mod error;
pub mod iter;
pub mod option;
pub mod result;

pub use crate::error::ResultError;
pub use crate::option::{FnFactory, OptionFactory, OptionLike, TypeFactory};
pub use crate::result::Result;
pub use crate::result::Result::{Err, Ok};
