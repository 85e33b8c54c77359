// SPDX-License-Identifier: MPL-2.0
//! Grid geometry and scroll proximity.
//!
//! Card sizes are derived from the window width each time the view is
//! built; nothing here is cached between frames.

use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::scrollable::Viewport;

/// Number of card columns.
pub const COLUMNS: usize = 2;

/// Default distance from the end of the content, in viewport heights, at
/// which another page is requested.
pub const DEFAULT_LOAD_THRESHOLD: f32 = 0.5;

/// Approximate height of the header above the grid.
pub const HEADER_HEIGHT: f32 = 100.0;

/// Height of the text block under a thumbnail: two title lines and a date.
const CARD_INFO_HEIGHT: f32 = 2.0 * spacing::CARD_PADDING
    + 2.0 * typography::CARD_TITLE_LINE
    + spacing::XS
    + typography::CAPTION * 1.3;

/// Card geometry for one window width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    card_width: f32,
}

impl GridLayout {
    /// Two columns with a gutter on both edges and between the cards.
    #[must_use]
    pub fn from_window_width(window_width: f32) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let gutters = spacing::GRID_GUTTER * (COLUMNS + 1) as f32;
        #[allow(clippy::cast_precision_loss)]
        let card_width = ((window_width - gutters) / COLUMNS as f32).max(sizing::MIN_CARD_WIDTH);
        Self { card_width }
    }

    #[must_use]
    pub fn card_width(&self) -> f32 {
        self.card_width
    }

    #[must_use]
    pub fn thumbnail_height(&self) -> f32 {
        self.card_width * sizing::THUMBNAIL_RATIO
    }

    #[must_use]
    pub fn gutter(&self) -> f32 {
        spacing::GRID_GUTTER
    }

    #[must_use]
    pub fn card_height(&self) -> f32 {
        self.thumbnail_height() + CARD_INFO_HEIGHT
    }

    /// Estimated height of a grid holding `count` cards.
    #[must_use]
    pub fn content_height(&self, count: usize) -> f32 {
        let rows = count.div_ceil(COLUMNS);
        if rows == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let rows = rows as f32;
        rows * self.card_height() + (rows - 1.0) * self.gutter()
    }
}

/// Snapshot of the grid scrollable's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset_y: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl ScrollMetrics {
    #[must_use]
    pub fn from_viewport(viewport: &Viewport) -> Self {
        Self {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
            content_height: viewport.content_bounds().height,
        }
    }

    /// Distance between the bottom of the viewport and the end of the content.
    #[must_use]
    pub fn distance_from_end(&self) -> f32 {
        (self.content_height - (self.offset_y + self.viewport_height)).max(0.0)
    }
}

/// Whether the viewport is within `threshold` viewport heights of the end.
#[must_use]
pub fn should_load_more(metrics: &ScrollMetrics, threshold: f32) -> bool {
    if metrics.viewport_height <= 0.0 {
        return false;
    }
    metrics.distance_from_end() <= threshold * metrics.viewport_height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(offset_y: f32, viewport_height: f32, content_height: f32) -> ScrollMetrics {
        ScrollMetrics {
            offset_y,
            viewport_height,
            content_height,
        }
    }

    #[test]
    fn card_width_splits_window_in_two_columns() {
        let layout = GridLayout::from_window_width(830.0);
        assert!((layout.card_width() - 400.0).abs() < f32::EPSILON);
        assert!((layout.thumbnail_height() - 225.0).abs() < 0.01);
    }

    #[test]
    fn card_width_never_collapses() {
        let layout = GridLayout::from_window_width(10.0);
        assert!((layout.card_width() - sizing::MIN_CARD_WIDTH).abs() < f32::EPSILON);
    }

    #[test]
    fn content_height_counts_partial_rows() {
        let layout = GridLayout::from_window_width(830.0);
        assert_eq!(layout.content_height(0), 0.0);
        assert!((layout.content_height(1) - layout.card_height()).abs() < 0.01);
        let three_rows = 3.0 * layout.card_height() + 2.0 * layout.gutter();
        assert!((layout.content_height(5) - three_rows).abs() < 0.01);
    }

    #[test]
    fn triggers_within_threshold() {
        // 300px left below a 600px viewport: exactly half a viewport.
        assert!(should_load_more(&metrics(1_100.0, 600.0, 2_000.0), 0.5));
        assert!(should_load_more(&metrics(1_400.0, 600.0, 2_000.0), 0.5));
    }

    #[test]
    fn does_not_trigger_before_threshold() {
        assert!(!should_load_more(&metrics(1_000.0, 600.0, 2_000.0), 0.5));
        assert!(!should_load_more(&metrics(0.0, 600.0, 2_000.0), 0.5));
    }

    #[test]
    fn larger_threshold_triggers_earlier() {
        let m = metrics(500.0, 600.0, 2_000.0);
        assert!(!should_load_more(&m, 0.5));
        assert!(should_load_more(&m, 1.5));
    }

    #[test]
    fn short_content_is_always_near_the_end() {
        assert!(should_load_more(&metrics(0.0, 600.0, 300.0), 0.5));
    }

    #[test]
    fn unmeasured_viewport_never_triggers() {
        assert!(!should_load_more(&ScrollMetrics::default(), 0.5));
    }
}
