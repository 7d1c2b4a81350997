// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Custom assertion helpers
//! - Temporary storage directories with auto-cleanup

mod assertions;
mod fixtures;
mod temp_dir;

#[allow(unused_imports)]
pub use assertions::{assert_ids_unique, assert_same_events};
#[allow(unused_imports)]
pub use fixtures::{all_day_draft, date, timed_draft};
pub use temp_dir::TempStorage;
