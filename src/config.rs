/// Configuration for the layout grid.
///
/// Presentation constants only — any values work as long as rows stay
/// centered and non-overlapping. Defaults match the reference frontend.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Vertical distance between consecutive layers (pixels).
    pub layer_height: f64,
    /// Width reserved per node (pixels).
    pub node_width: f64,
    /// Horizontal gap between neighbouring nodes in a row (pixels).
    pub spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            layer_height: 220.0,
            node_width: 280.0,
            spacing: 60.0,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
