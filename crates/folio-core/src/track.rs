use crate::constants::{
    COMPACT_BREAKPOINT_PX, TRACK_STD_ITEM_VW, TRACK_WIDE_ITEM_VW,
};

/// Responsive rendering mode. One parametrized layout path instead of two
/// viewport-gated branches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// Narrow viewport: vertical stack, focus from per-item viewport
    /// intersection.
    Compact,
    /// Wide viewport: shared horizontal track, focus from track centers.
    Wide,
}

pub fn layout_mode(viewport_width_px: f32) -> LayoutMode {
    if viewport_width_px < COMPACT_BREAKPOINT_PX {
        LayoutMode::Compact
    } else {
        LayoutMode::Wide
    }
}

/// Orientation of a media item on the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemAspect {
    /// Landscape hero media (video slot).
    Wide,
    /// Standard gallery still.
    Standard,
}

impl ItemAspect {
    pub fn width_vw(self, mode: LayoutMode) -> f32 {
        match (self, mode) {
            // Compact mode stacks items full-width; the track math is unused
            // there but the extent stays meaningful for measurements.
            (_, LayoutMode::Compact) => 90.0,
            (ItemAspect::Wide, LayoutMode::Wide) => TRACK_WIDE_ITEM_VW,
            (ItemAspect::Standard, LayoutMode::Wide) => TRACK_STD_ITEM_VW,
        }
    }
}

/// Geometry of a horizontal choreography track.
///
/// Scroll progress 0 centers the first item on `viewport_center`; progress 1
/// centers the last. Each item's `centers[i]` is the progress value at which
/// that item sits exactly on the focal column.
#[derive(Clone, Debug)]
pub struct TrackLayout {
    /// Track translation at progress 0.
    pub start_x: f32,
    /// Total travel from progress 0 to 1. Zero for degenerate tracks.
    pub travel: f32,
    /// Per-item center-point progress values.
    pub centers: Vec<f32>,
}

impl TrackLayout {
    /// `widths` and `gap` share one unit (vw in practice); `viewport_center`
    /// is the focal column in the same unit.
    pub fn compute(widths: &[f32], gap: f32, viewport_center: f32) -> Self {
        if widths.is_empty() {
            return Self {
                start_x: 0.0,
                travel: 0.0,
                centers: Vec::new(),
            };
        }

        // Cumulative left edge of each item along the track.
        let mut offsets = Vec::with_capacity(widths.len());
        let mut cursor = 0.0f32;
        for w in widths {
            offsets.push(cursor);
            cursor += w + gap;
        }

        let first_half = widths[0] * 0.5;
        let start_x = viewport_center - first_half;
        let last = widths.len() - 1;
        let travel = offsets[last] + widths[last] * 0.5 - first_half;

        if travel <= f32::EPSILON {
            // Single item, or content narrower than one item's span: treat
            // as already centered with no scroll-driven movement.
            return Self {
                start_x,
                travel: 0.0,
                centers: vec![0.0; widths.len()],
            };
        }

        let centers = offsets
            .iter()
            .zip(widths)
            .map(|(off, w)| (off + w * 0.5 - first_half) / travel)
            .collect();

        Self {
            start_x,
            travel,
            centers,
        }
    }

    /// Track translation at scroll progress `p`.
    pub fn x_at(&self, p: f32) -> f32 {
        self.start_x - p.clamp(0.0, 1.0) * self.travel
    }

    pub fn is_static(&self) -> bool {
        self.travel <= 0.0
    }
}

/// Scroll progress of a sticky section: 0 when its top reaches the viewport
/// top, 1 when its bottom reaches the viewport bottom. `section_top` is the
/// bounding-rect top (goes negative as the page scrolls past).
pub fn sticky_progress(section_top: f64, section_height: f64, viewport_height: f64) -> f32 {
    let scrollable = section_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    ((-section_top / scrollable) as f32).clamp(0.0, 1.0)
}

/// Compact-mode focus driver: an item's own traversal of the viewport,
/// 0 as its top enters from below, 1 as its bottom leaves above. Feeding
/// this through an envelope centered at 0.5 gives full focus when the item
/// is centered on screen, the same contract as the shared-track centers.
pub fn intersection_progress(item_top: f64, item_height: f64, viewport_height: f64) -> f32 {
    let span = viewport_height + item_height;
    if span <= 0.0 {
        return 0.0;
    }
    (((viewport_height - item_top) / span) as f32).clamp(0.0, 1.0)
}
