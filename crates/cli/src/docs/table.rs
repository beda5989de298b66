// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! RST simple tables.

use crate::error::{Error, Result};

/// Space between two columns.
const GUTTER: &str = "    ";

/// Render an RST simple table from titles and per-column cells.
///
/// `columns[i]` holds the cells under `titles[i]`, top to bottom. Each
/// column is as wide as its longest title or cell. The returned lines end
/// with an empty string, so joining them with `\n` yields a trailing newline.
pub fn mk_rst_table<T: AsRef<str>, C: AsRef<str>>(
    titles: &[T],
    columns: &[Vec<C>],
) -> Result<Vec<String>> {
    if titles.len() != columns.len() {
        return Err(Error::MismatchedRowWidth {
            titles: titles.len(),
            columns: columns.len(),
        });
    }
    let rows = columns.first().map_or(0, Vec::len);
    if let Some((column, col)) = columns.iter().enumerate().find(|(_, c)| c.len() != rows) {
        return Err(Error::MismatchedColumnLength {
            column,
            len: col.len(),
            expected: rows,
        });
    }

    let widths: Vec<usize> = titles
        .iter()
        .zip(columns)
        .map(|(title, cells)| {
            cells
                .iter()
                .map(|c| c.as_ref().chars().count())
                .chain(std::iter::once(title.as_ref().chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let separator = widths
        .iter()
        .map(|w| "=".repeat(*w))
        .collect::<Vec<_>>()
        .join(GUTTER);

    let mut table = Vec::with_capacity(rows + 5);
    table.push(separator.clone());
    table.push(render_row(titles.iter().map(|t| t.as_ref()), &widths));
    table.push(separator.clone());
    for row in 0..rows {
        table.push(render_row(
            columns.iter().map(|col| col[row].as_ref()),
            &widths,
        ));
    }
    table.push(separator);
    table.push(String::new());
    Ok(table)
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(GUTTER)
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
