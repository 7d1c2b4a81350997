// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod event_lifecycle;
mod form_submission;
mod month_view;
mod persistence;
