// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Contract violations raised by the extracting operations of `Result`.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::config::CONFIG;

/// Errors describing a misuse of a [`Result`](crate::Result).
///
/// None of these is ordinary control flow. The panicking operations format
/// one of these into their panic message, and the `try_` operations hand it
/// back to the caller.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ResultError {
    /// `unwrap` or `expect` was called on an `Err`.
    #[error("{message}")]
    UnwrapOnErr { message: String },
    /// `unwrap_err` or `expect_err` was called on an `Ok`.
    #[error("{message}")]
    UnwrapErrOnOk { message: String },
    /// `into_ok` was called on an `Err`, or `into_err` on an `Ok`.
    #[error("called {operation} on an {found} value, should be unreachable")]
    UnreachableState {
        operation: &'static str,
        found: &'static str,
    },
    /// An [`OptionFactory`](crate::OptionFactory) failed to build its value.
    #[error("could not construct the option value: {reason}")]
    Construction { reason: String },
}

impl ResultError {
    pub(crate) fn unwrap_on_err<E: fmt::Debug>(error: &E) -> Self {
        ResultError::UnwrapOnErr {
            message: format!("called unwrap on an Err value: {:?}", error),
        }
    }

    pub(crate) fn expect_on_err<E: fmt::Display>(msg: &str, error: &E) -> Self {
        ResultError::UnwrapOnErr {
            message: format!("{}: {}", msg, error),
        }
    }

    pub(crate) fn unwrap_err_on_ok<T: fmt::Debug>(value: &T) -> Self {
        ResultError::UnwrapErrOnOk {
            message: format!("called unwrap_err on an Ok value: {:?}", value),
        }
    }

    pub(crate) fn expect_err_on_ok<T: fmt::Display>(msg: &str, value: &T) -> Self {
        ResultError::UnwrapErrOnOk {
            message: format!("{}: {}", msg, value),
        }
    }

    pub(crate) fn unreachable(operation: &'static str, found: &'static str) -> Self {
        ResultError::UnreachableState { operation, found }
    }

    pub(crate) fn construction<R: fmt::Display>(reason: R) -> Self {
        ResultError::Construction {
            reason: format!("{}", reason),
        }
    }

    /// Short name of the violation, used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            ResultError::UnwrapOnErr { .. } => "UnwrapOnErr",
            ResultError::UnwrapErrOnOk { .. } => "UnwrapErrOnOk",
            ResultError::UnreachableState { .. } => "UnreachableState",
            ResultError::Construction { .. } => "Construction",
        }
    }
}

/// Report a contract violation and abort the current operation.
///
/// All panicking `Result` operations funnel through here so the panic message
/// and the log line always agree.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn raise(err: ResultError) -> ! {
    if CONFIG.log_violations {
        tracing::error!(kind = err.kind(), "{}", err);
    }
    panic!("{}", err)
}
