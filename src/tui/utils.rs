//! Layout helpers for the terminal user interface.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of one card including its border.
pub const CARD_HEIGHT: u16 = 6;

/// A rectangle of `percent_x` by `percent_y` centred in `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Number of card columns for a given width: one on narrow terminals, three on wide ones.
pub fn grid_columns(width: u16) -> usize {
    match width {
        0..=59 => 1,
        60..=89 => 2,
        _ => 3,
    }
}

/// Number of whole card rows that fit in `height`, at least one.
pub fn visible_rows(height: u16) -> usize {
    ((height / CARD_HEIGHT) as usize).max(1)
}

/// Screen rectangles for `count` cards laid out row by row in `area`.
///
/// Only rows that fit completely are returned, so the result may be shorter
/// than `count`.
pub fn card_rects(area: Rect, columns: usize, count: usize) -> Vec<Rect> {
    let columns = columns.max(1);
    let card_width = area.width / columns as u16;
    let max_rows = (area.height / CARD_HEIGHT) as usize;
    (0..count)
        .map_while(|i| {
            let row = i / columns;
            if row >= max_rows {
                return None;
            }
            let col = i % columns;
            Some(Rect {
                x: area.x + col as u16 * card_width,
                y: area.y + row as u16 * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT,
            })
        })
        .collect()
}

/// Width of a label in terminal cells, counting one cell per char.
pub fn label_width(label: &str) -> u16 {
    label.chars().count() as u16
}
