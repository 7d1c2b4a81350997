// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod calendar_store;
mod component;
mod component_form;
mod component_form_util;
mod component_page;
mod dispatcher;
mod event_form;
mod form_store;
mod modal;
mod month_view;
mod view_more;

pub use app::run_calendar;
