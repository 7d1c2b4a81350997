// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Named regions of the frame that views render into.

use std::collections::HashMap;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

use crate::tui::event_form::FORM_HEIGHT;

/// The region modals are drawn into, on top of the calendar.
pub const MODAL_CONTAINER_ID: &str = "modal-container";

/// The region of the month view.
pub const CALENDAR_ID: &str = "calendar";

const MODAL_WIDTH: u16 = 60;
const MODAL_HEIGHT: u16 = FORM_HEIGHT + 2;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MountPoints(HashMap<&'static str, Rect>);

impl MountPoints {
    pub fn publish(&mut self, id: &'static str, area: Rect) {
        self.0.insert(id, area);
    }

    pub fn get(&self, id: &str) -> Option<Rect> {
        self.0.get(id).copied()
    }

    /// The area of a mount point that the frame layout must have published.
    ///
    /// # Panics
    ///
    /// Panics if no mount point with the id was published.
    pub fn require(&self, id: &str) -> Rect {
        match self.get(id) {
            Some(area) => area,
            None => panic!("mount point {id:?} is not published"),
        }
    }
}

/// Publishes the mount points of a frame.
pub fn frame_layout(area: Rect) -> MountPoints {
    let mut points = MountPoints::default();
    points.publish(CALENDAR_ID, area);
    points.publish(
        MODAL_CONTAINER_ID,
        centered_rect(area, MODAL_WIDTH, MODAL_HEIGHT),
    );
    points
}

/// A `width` x `height` rect centered in `area`, clamped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    area
}
