// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! netdiag-core: host profile, command catalog, and execution results for
//! the netdiag CLI.

pub mod macros;

pub mod catalog;
pub mod clock;
pub mod config;
pub mod encoding;
pub mod platform;
pub mod result;

pub use catalog::{ActionId, Catalog, CatalogError, Category, Parameter, Safety};
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{Config, ConfigError};
pub use encoding::{EncodingError, OutputEncoding};
pub use platform::{HostProfile, Platform};
pub use result::ExecutionResult;
