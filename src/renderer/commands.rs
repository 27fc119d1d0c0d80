//! Draw commands for 2D rendering

/// Axis-aligned rectangle in canvas pixels
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// Text styling for centered overlay captions
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font: &'static str,
    pub color: &'static str,
    /// Glow color and blur radius
    pub glow: Option<(&'static str, f64)>,
}

/// One primitive, in paint order
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    FillRect { rect: Rect, color: &'static str },
    StrokeRect { rect: Rect, color: &'static str },
    /// Text centered horizontally on `x`
    Text {
        text: &'static str,
        x: f64,
        y: f64,
        style: TextStyle,
    },
}

/// A full redraw of the board
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCmd>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: DrawCmd) {
        self.commands.push(cmd);
    }

    pub fn extend(&mut self, cmds: impl IntoIterator<Item = DrawCmd>) {
        self.commands.extend(cmds);
    }
}

/// Colors for game elements (CSS color strings)
pub mod colors {
    pub const TILE_DARK: &str = "#0f1419";
    pub const TILE_LIGHT: &str = "#1a1f2e";
    pub const SNAKE: &str = "#00ffff";
    pub const SNAKE_BORDER: &str = "#00d9ff";
    pub const FOOD: &str = "#ff3366";
    pub const OVERLAY: &str = "rgba(0, 0, 0, 0.7)";
    pub const GAME_OVER_TEXT: &str = "#ff3366";
    pub const HINT_TEXT: &str = "#00d9ff";
}
