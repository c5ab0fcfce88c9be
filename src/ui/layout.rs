use ratatui::layout::Rect;

/// Border (1 cell) plus padding (2 cells) on each side
const HORIZONTAL_CHROME: u16 = 6;

/// Border (1 row) plus padding (1 row) on each side
const VERTICAL_CHROME: u16 = 4;

/// Narrowest box we draw, so the screen doesn't jump while filtering
const MIN_BOX_WIDTH: u16 = 48;

/// Layout information for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInfo {
    /// Bordered box holding everything
    pub box_area: Rect,
    /// Area inside border and padding
    pub content_area: Rect,
}

/// Size the main box to its content, centred horizontally, one row from the top
///
/// The box is clamped to the terminal, so content may be cut off on very
/// small terminals but rendering never panics.
pub fn calculate_layout(terminal_size: Rect, content_width: u16, content_height: u16) -> LayoutInfo {
    let width = content_width
        .saturating_add(HORIZONTAL_CHROME)
        .max(MIN_BOX_WIDTH)
        .min(terminal_size.width);
    let height = content_height
        .saturating_add(VERTICAL_CHROME)
        .min(terminal_size.height.saturating_sub(1));

    let box_area = Rect {
        x: terminal_size.x + (terminal_size.width - width) / 2,
        y: terminal_size.y + terminal_size.height.min(1),
        width,
        height,
    };

    let content_area = Rect {
        x: box_area.x + 3,
        y: box_area.y + 2,
        width: box_area.width.saturating_sub(HORIZONTAL_CHROME),
        height: box_area.height.saturating_sub(VERTICAL_CHROME),
    };

    LayoutInfo {
        box_area,
        content_area,
    }
}
