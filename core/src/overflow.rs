// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Overflow computation for item lists rendered in constrained space.
//!
//! Extents are measured along the main axis of the container: rows for a
//! vertical list, columns for a horizontal one.

/// How a list of items splits into rendered items and a collapsed remainder.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Overflow {
    /// Number of leading items that are rendered.
    pub visible: usize,

    /// Number of trailing items collapsed into the indicator.
    pub hidden: usize,
}

impl Overflow {
    pub fn has_overflow(&self) -> bool {
        self.hidden > 0
    }

    /// The indicator text, `None` when every item fits.
    pub fn label(&self) -> Option<String> {
        self.has_overflow().then(|| format!("+{} More", self.hidden))
    }
}

/// Computes how many items fit in `available`.
///
/// When all items fit, all are visible. Otherwise the longest prefix that
/// still leaves room for the indicator is visible and the rest is hidden.
pub fn fit_count(extents: &[u16], available: u16, indicator: u16) -> Overflow {
    let total: u32 = extents.iter().copied().map(u32::from).sum();
    if total <= u32::from(available) {
        return Overflow {
            visible: extents.len(),
            hidden: 0,
        };
    }

    let budget = u32::from(available.saturating_sub(indicator));
    let mut used = 0;
    let visible = extents
        .iter()
        .take_while(|&&extent| {
            used += u32::from(extent);
            used <= budget
        })
        .count();

    Overflow {
        visible,
        hidden: extents.len() - visible,
    }
}

/// Caches the split of one container and recomputes it only when the
/// container or its items were resized.
///
/// Resize notifications may arrive any number of times; calling
/// [`OverflowLayout::measure`] repeatedly with unchanged inputs is cheap and
/// returns the same split.
#[derive(Debug, Clone)]
pub struct OverflowLayout {
    indicator: u16,
    measured: Option<(Vec<u16>, u16)>,
    split: Overflow,
    recomputed: usize,
}

impl OverflowLayout {
    /// Creates a layout whose indicator takes `indicator` along the main axis.
    pub fn new(indicator: u16) -> Self {
        Self {
            indicator,
            measured: None,
            split: Overflow::default(),
            recomputed: 0,
        }
    }

    /// Measures the rendered item extents against the available extent.
    pub fn measure(&mut self, extents: &[u16], available: u16) -> Overflow {
        let unchanged = matches!(
            &self.measured,
            Some((last_extents, last_available))
                if *last_available == available && last_extents.as_slice() == extents
        );

        if !unchanged {
            self.split = fit_count(extents, available, self.indicator);
            self.measured = Some((extents.to_vec(), available));
            self.recomputed += 1;
            tracing::trace!(available, items = extents.len(), split = ?self.split, "overflow recomputed");
        }
        self.split
    }

    /// The split of the last measurement.
    pub fn split(&self) -> Overflow {
        self.split
    }

    /// How many times the split was actually recomputed.
    pub fn recomputed(&self) -> usize {
        self.recomputed
    }
}
