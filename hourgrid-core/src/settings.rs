use crate::dot_matrix::{DotMatrixConfig, DotMatrixRenderer};
use crate::error::PipelineError;
use crate::grid::GridConstraints;
use crate::line_chart::{LineChartConfig, LineChartRenderer};
use crate::quantize::Domain;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DOT_MATRIX_ROWS: usize = 7;
pub const DOT_MATRIX_MIN_CELL: f64 = 10.0;
pub const DOT_MATRIX_MAX_CELL: f64 = 18.0;
pub const DOT_MATRIX_GAP: f64 = 4.0;
pub const DOT_MATRIX_PALETTE_SIZE: usize = 4;
pub const DOT_MATRIX_FALLBACK_CELL: f64 = 12.0;
pub const DOT_MATRIX_DOMAIN: Domain = Domain { min: 0.0, max: 10.0 };

pub const LINE_CHART_HEIGHT: f64 = 160.0;
pub const LINE_CHART_MIN_CELL: f64 = 12.0;
pub const LINE_CHART_MAX_CELL: f64 = 48.0;
pub const LINE_CHART_GAP: f64 = 0.0;
pub const LINE_CHART_SMOOTHING: f64 = crate::curve::DEFAULT_SMOOTHING;
pub const LINE_CHART_FALLBACK_CELL: f64 = 24.0;
pub const LINE_CHART_DOMAIN: Domain = Domain { min: 4.0, max: 10.0 };

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid settings: {0}")]
    Invalid(#[from] PipelineError),
}

/// Layout options for every widget kind, as stored in a settings file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    pub dot_matrix: DotMatrixSettings,
    pub line_chart: LineChartSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotMatrixSettings {
    pub rows: usize,
    pub min_cell: f64,
    pub max_cell: f64,
    pub gap: f64,
    pub palette_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_cell: Option<f64>,
    pub domain: Domain,
}

impl Default for DotMatrixSettings {
    fn default() -> Self {
        Self {
            rows: DOT_MATRIX_ROWS,
            min_cell: DOT_MATRIX_MIN_CELL,
            max_cell: DOT_MATRIX_MAX_CELL,
            gap: DOT_MATRIX_GAP,
            palette_size: DOT_MATRIX_PALETTE_SIZE,
            fallback_cell: Some(DOT_MATRIX_FALLBACK_CELL),
            domain: DOT_MATRIX_DOMAIN,
        }
    }
}

impl DotMatrixSettings {
    pub fn grid(&self) -> GridConstraints {
        GridConstraints {
            min_cell: self.min_cell,
            max_cell: self.max_cell,
            gap: self.gap,
        }
    }

    pub fn config(&self) -> DotMatrixConfig {
        DotMatrixConfig {
            rows: self.rows,
            grid: self.grid(),
            domain: self.domain,
            palette_size: self.palette_size,
        }
    }

    pub fn renderer(&self) -> Result<DotMatrixRenderer, SettingsError> {
        Ok(DotMatrixRenderer::new(self.config(), self.fallback_cell)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineChartSettings {
    pub height: f64,
    pub min_cell: f64,
    pub max_cell: f64,
    pub gap: f64,
    pub smoothing: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_cell: Option<f64>,
    pub domain: Domain,
}

impl Default for LineChartSettings {
    fn default() -> Self {
        Self {
            height: LINE_CHART_HEIGHT,
            min_cell: LINE_CHART_MIN_CELL,
            max_cell: LINE_CHART_MAX_CELL,
            gap: LINE_CHART_GAP,
            smoothing: LINE_CHART_SMOOTHING,
            fallback_cell: Some(LINE_CHART_FALLBACK_CELL),
            domain: LINE_CHART_DOMAIN,
        }
    }
}

impl LineChartSettings {
    pub fn grid(&self) -> GridConstraints {
        GridConstraints {
            min_cell: self.min_cell,
            max_cell: self.max_cell,
            gap: self.gap,
        }
    }

    pub fn config(&self) -> LineChartConfig {
        LineChartConfig {
            height: self.height,
            grid: self.grid(),
            domain: self.domain,
            smoothing: self.smoothing,
        }
    }

    pub fn renderer(&self) -> Result<LineChartRenderer, SettingsError> {
        Ok(LineChartRenderer::new(self.config(), self.fallback_cell)?)
    }
}

pub fn normalize_widget_settings(
    settings: WidgetSettings,
) -> Result<WidgetSettings, SettingsError> {
    settings.dot_matrix.config().validate()?;
    if let Some(cell) = settings.dot_matrix.fallback_cell {
        settings
            .dot_matrix
            .grid()
            .check_cell("dot_matrix.fallback_cell", cell)?;
    }
    settings.line_chart.config().validate()?;
    if let Some(cell) = settings.line_chart.fallback_cell {
        settings
            .line_chart
            .grid()
            .check_cell("line_chart.fallback_cell", cell)?;
    }
    Ok(settings)
}

pub fn parse_widget_settings(text: &str) -> Result<WidgetSettings, SettingsError> {
    let settings: WidgetSettings = toml::from_str(text)?;
    normalize_widget_settings(settings)
}

pub fn load_widget_settings_file(path: &Path) -> Result<WidgetSettings, SettingsError> {
    let text = std::fs::read_to_string(path)?;
    parse_widget_settings(&text)
}

pub fn save_widget_settings_file(
    path: &Path,
    settings: &WidgetSettings,
) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(settings)?;
    std::fs::write(path, text)?;
    Ok(())
}
