use crate::geometry::Point;
use super::config::EditorConfig;


/// Display scale of the canvas
/// Only affects how pointer positions map to canvas coordinates, never the graph
#[derive(Clone, Debug, PartialEq)]
pub struct Zoom {
    scale: f64,
    min: f64,
    max: f64,
    step: f64,
}

impl Zoom {

    pub fn new(config: &EditorConfig) -> Self {
        // swapped bounds would make clamp panic
        let (min, max) = if config.min_zoom <= config.max_zoom {
            (config.min_zoom, config.max_zoom)
        } else {
            (config.max_zoom, config.min_zoom)
        };
        Self {
            scale: 1.0_f64.clamp(min, max),
            min,
            max,
            step: config.zoom_step,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.set(self.scale + self.step)
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.set(self.scale - self.step)
    }

    /// Clamp into [min, max]
    /// Rounded so repeated steps do not drift (1.0 + 0.1 * 10 lands on 2.0)
    fn set(&mut self, scale: f64) -> f64 {
        let rounded = (scale * 1e6).round() / 1e6;
        self.scale = rounded.clamp(self.min, self.max);
        self.scale
    }

    /// Convert a position relative to the canvas element into canvas coordinates
    pub fn to_canvas(&self, screen: Point) -> Point {
        screen.unscale(self.scale)
    }
}
