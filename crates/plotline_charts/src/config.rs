//! TOML chart configuration.
//!
//! ```toml
//! [metadata]
//! title = "Steps"
//! subtitle = "Last week"
//!
//! [chart_style]
//! info_box_placement = "header"
//! touch_unit = { suffix = "steps" }
//!
//! [extra_line]
//! line_type = "stepped"
//! line_colour = { type = "colour", colour = "#34c759" }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::extra_line::ExtraLineStyle;
use crate::model::{ChartMetadata, ChartModel, ChartStyle};

/// Styling for a chart and its optional extra line. Omitted keys take their
/// defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub metadata: ChartMetadata,
    pub chart_style: ChartStyle,
    pub extra_line: Option<ExtraLineStyle>,
}

impl ChartConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse chart configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Apply the metadata and chart style to `model`.
    pub fn apply_to(&self, model: &mut ChartModel) {
        model.metadata = self.metadata.clone();
        model.chart_style = self.chart_style.clone();
    }
}
