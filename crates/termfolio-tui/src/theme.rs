use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    /// Muted foreground for unrevealed or secondary content
    pub dim: Color,

    // Semantic colors
    pub accent: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
    pub info: Color,
}
