use serde::{Deserialize, Serialize};
use std::time::Duration;


/// Tunables of the graph editor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_step: f64,
    /// Weight given to edges drawn with the edge tool
    pub default_weight: f64,
    /// How long the "running" highlight stays on after Run
    pub run_duration_ms: u64,
    /// Pointer hit radius around a node, in canvas units
    pub hit_radius: f64,
}

impl EditorConfig {
    pub fn run_duration(&self) -> Duration {
        Duration::from_millis(self.run_duration_ms)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.5,
            max_zoom: 2.0,
            zoom_step: 0.1,
            default_weight: 1.0,
            run_duration_ms: 800,
            hit_radius: 16.0,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: EditorConfig = serde_json::from_str(r#"{ "default_weight": 3.0 }"#).unwrap();
        assert_eq!(config.default_weight, 3.0);
        assert_eq!(config.max_zoom, 2.0);
        assert_eq!(config.run_duration(), Duration::from_millis(800));
    }
}
