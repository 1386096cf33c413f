use crate::instance::WidgetPosition;
use crate::registry::SizeHints;

/// Grid columns at the widest breakpoint; positions are clamped against this
/// when no narrower width is requested.
pub const DEFAULT_GRID_COLS: u32 = 10;

/// Clamp a decoded position to the descriptor's size hints and the grid
/// width. Instance-level max bounds (persisted with the position) take
/// precedence over descriptor hints, mirroring how saved layouts override
/// widget defaults.
pub fn clamp_position(pos: WidgetPosition, hints: SizeHints, grid_cols: u32) -> WidgetPosition {
    let grid_cols = grid_cols.max(1);
    let mut out = pos;

    out.width = out.width.max(1);
    out.height = out.height.max(1);
    if let Some(min) = hints.min_width {
        out.width = out.width.max(min);
    }
    if let Some(min) = hints.min_height {
        out.height = out.height.max(min);
    }
    if let Some(max) = pos.max_width.or(hints.max_width) {
        out.width = out.width.min(max.max(1));
    }
    if let Some(max) = pos.max_height.or(hints.max_height) {
        out.height = out.height.min(max.max(1));
    }

    out.width = out.width.min(grid_cols);
    if out.x + out.width > grid_cols {
        out.x = grid_cols - out.width;
    }
    out
}

/// Reading order: top to bottom, ties left to right.
pub fn sort_reading_order<T>(items: &mut [(WidgetPosition, T)]) {
    items.sort_by(|(a, _), (b, _)| a.y.cmp(&b.y).then(a.x.cmp(&b.x)));
}

/// Repack positions into a narrower grid, preserving reading order. Items
/// are placed left to right and wrapped into new rows whose height is the
/// tallest item in the row. Used when the rendering surface has fewer
/// columns than the layout was saved against.
pub fn reflow<T>(items: &mut [(WidgetPosition, T)], max_cols: u32) {
    let max_cols = max_cols.max(1);
    sort_reading_order(items);

    let mut cursor_x = 0u32;
    let mut cursor_y = 0u32;
    let mut row_height = 0u32;
    for (pos, _) in items.iter_mut() {
        pos.width = pos.width.min(max_cols);
        if cursor_x + pos.width > max_cols {
            cursor_x = 0;
            cursor_y += row_height;
            row_height = 0;
        }
        pos.x = cursor_x;
        pos.y = cursor_y;
        cursor_x += pos.width;
        row_height = row_height.max(pos.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: u32, y: u32, w: u32, h: u32) -> WidgetPosition {
        WidgetPosition::new(x, y, w, h)
    }

    #[test]
    fn clamps_to_descriptor_bounds() {
        let hints = SizeHints::fixed(2, 6);
        let clamped = clamp_position(pos(0, 0, 8, 1), hints, DEFAULT_GRID_COLS);
        assert_eq!((clamped.width, clamped.height), (2, 6));
    }

    #[test]
    fn instance_max_overrides_descriptor_max() {
        let hints = SizeHints {
            max_width: Some(6),
            ..SizeHints::default()
        };
        let mut p = pos(0, 0, 8, 4);
        p.max_width = Some(3);
        let clamped = clamp_position(p, hints, DEFAULT_GRID_COLS);
        assert_eq!(clamped.width, 3);
    }

    #[test]
    fn pulls_overflowing_widgets_back_into_the_grid() {
        let clamped = clamp_position(pos(9, 0, 4, 4), SizeHints::default(), 10);
        assert_eq!(clamped.x, 6);
        assert_eq!(clamped.width, 4);
    }

    #[test]
    fn wide_widgets_shrink_to_grid() {
        let clamped = clamp_position(pos(0, 0, 24, 4), SizeHints::default(), 10);
        assert_eq!(clamped.width, 10);
        assert_eq!(clamped.x, 0);
    }

    #[test]
    fn reading_order_sorts_by_row_then_column() {
        let mut items = vec![(pos(4, 4, 1, 1), "c"), (pos(0, 0, 1, 1), "a"), (pos(4, 0, 1, 1), "b")];
        sort_reading_order(&mut items);
        let order: Vec<&str> = items.iter().map(|(_, t)| *t).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn reflow_packs_rows_and_wraps() {
        let mut items = vec![
            (pos(0, 0, 4, 4), "a"),
            (pos(4, 0, 4, 2), "b"),
            (pos(8, 0, 4, 4), "c"),
        ];
        reflow(&mut items, 8);
        assert_eq!(items[0].0, pos(0, 0, 4, 4));
        assert_eq!(items[1].0, pos(4, 0, 4, 2));
        // third item wraps below the tallest widget of the first row
        assert_eq!((items[2].0.x, items[2].0.y), (0, 4));
    }

    #[test]
    fn reflow_clamps_items_wider_than_the_grid() {
        let mut items = vec![(pos(0, 0, 6, 2), "a")];
        reflow(&mut items, 2);
        assert_eq!(items[0].0.width, 2);
    }
}
