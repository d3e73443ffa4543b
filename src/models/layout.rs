//! Split-pane geometry types.

/// Measurements of the page layout taken when the pointer moves.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutMetrics {
    /// Left edge of the main container (viewport coordinates)
    pub container_left: f64,
    /// Width of the main container
    pub container_width: f64,
    /// Rendered width of the file sidebar
    pub sidebar_width: f64,
    /// Rendered width of the drag separator
    pub separator_width: f64,
}

impl LayoutMetrics {
    /// Horizontal space shared by the source and preview panes.
    pub fn available_width(&self) -> f64 {
        self.container_width - self.sidebar_width - self.separator_width
    }
}

/// Fixed pixel widths of the two panes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaneWidths {
    pub source: f64,
    pub preview: f64,
}

impl PaneWidths {
    /// Inline style pinning a pane to `width` pixels.
    pub fn fixed_style(width: f64) -> String {
        format!("flex: none; width: {}px;", width)
    }
}
