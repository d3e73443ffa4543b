//! Split-pane resizer.
//!
//! A two-state machine driven by pointer events on the separator and the
//! window, plus the pure width computation used while dragging.

use crate::config::LayoutConfig;
use crate::models::{LayoutMetrics, PaneWidths};

/// Drag state of the separator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Compute pane widths for a pointer at viewport position `pointer_x`.
///
/// The source pane is clamped to `[min_pane, available - min_pane]`, then
/// shrunk further if the preview would be narrower than `min_preview`.
/// When the available width cannot fit `min_preview`, the source pane
/// collapses to zero and the preview takes all of it. The two widths always
/// sum to the available width.
pub fn compute_widths(pointer_x: f64, metrics: &LayoutMetrics, limits: &LayoutConfig) -> PaneWidths {
    let available = metrics.available_width();
    let proposed = pointer_x - metrics.container_left - metrics.sidebar_width;

    let mut source = proposed
        .min(available - limits.min_pane_width)
        .max(limits.min_pane_width);
    if available - source < limits.min_preview_width {
        source = available - limits.min_preview_width;
    }
    let source = source.max(0.0);

    PaneWidths {
        source,
        preview: available - source,
    }
}

/// Separator drag controller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resizer {
    state: DragState,
    limits: LayoutConfig,
}

impl Resizer {
    pub fn new(limits: LayoutConfig) -> Self {
        Self {
            state: DragState::Idle,
            limits,
        }
    }

    #[cfg(test)]
    fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Pointer pressed on the separator.
    pub fn press(&mut self) {
        self.state = DragState::Dragging;
    }

    /// Pointer released anywhere. Returns `true` if a drag ended.
    pub fn release(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }

    /// Pointer moved. Only computes widths while dragging.
    pub fn pointer_move(&self, pointer_x: f64, metrics: &LayoutMetrics) -> Option<PaneWidths> {
        self.is_dragging()
            .then(|| compute_widths(pointer_x, metrics, &self.limits))
    }
}
