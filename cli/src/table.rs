// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// A plain text table, one row per item.
pub struct Table<'a, T, C: Column<T>> {
    columns: &'a [C],
    separator: &'a str,
    padding: bool,
    data: &'a [T],
}

impl<'a, T, C: Column<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            separator: " ",
            padding: true,
            data,
        }
    }

    #[allow(dead_code)]
    pub fn with_separator(mut self, separator: &'a str) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_padding(mut self, padding: bool) -> Self {
        self.padding = padding;
        self
    }

    fn column_widths(&self, table: &[Vec<String>]) -> Vec<usize> {
        let mut widths = vec![0; self.columns.len()];
        for row in table {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.width());
            }
        }
        widths
    }
}

impl<T, C: Column<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table: Vec<Vec<String>> = self
            .data
            .iter()
            .map(|item| self.columns.iter().map(|col| col.format(item)).collect())
            .collect();

        let widths = self.padding.then(|| self.column_widths(&table));
        let last = self.columns.len().saturating_sub(1);

        for (row, item) in table.into_iter().zip(self.data) {
            for (j, (col, cell)) in self.columns.iter().zip(row).enumerate() {
                let direction = col.padding_direction();
                // a left-aligned last column needs no trailing spaces
                let width = match &widths {
                    Some(_) if j == last && direction == PaddingDirection::Left => None,
                    Some(w) => Some(w[j]),
                    None => None,
                };

                let cell = pad(cell, width, direction);
                match col.get_color(item) {
                    Some(color) => write!(f, "{}", cell.color(color))?,
                    None => write!(f, "{cell}")?,
                }

                if j < last {
                    write!(f, "{}", self.separator)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub trait Column<T> {
    fn format(&self, data: &T) -> String;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

fn pad(cell: String, width: Option<usize>, direction: PaddingDirection) -> String {
    let Some(width) = width else {
        return cell;
    };
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        PaddingDirection::Left => cell + &fill,
        PaddingDirection::Right => fill + &cell,
    }
}
