// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! netdiag-shell: run a command line through the host shell and capture its
//! combined output.
//!
//! ```ignore
//! use netdiag_core::HostProfile;
//! use netdiag_shell::ShellRunner;
//!
//! let runner = ShellRunner::new(HostProfile::detect());
//! let result = runner.run("hostname").await?;
//! print!("{}", result.output_text);
//! ```

mod error;
mod executor;
mod runner;
mod shell;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use error::RunError;
pub use executor::CommandExecutor;
pub use runner::ShellRunner;
pub use shell::{Shell, StartupFailure};

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeExecutor, FakeOutcome};
