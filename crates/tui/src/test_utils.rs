//! Shared helpers for widget and app rendering tests.

use ratatui::buffer::Buffer;

/// Flattens a render buffer into newline-separated rows for `contains`
/// assertions. Trailing spaces on each row are dropped so expected strings
/// don't have to pad to the full terminal width.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    (0..area.height)
        .map(|y| {
            let row: String = (0..area.width)
                .filter_map(|x| buf.cell((x, y)))
                .map(|cell| cell.symbol())
                .collect();
            format!("{}\n", row.trim_end())
        })
        .collect()
}
