//! Adaptive time-series rendering for the working-hours widgets.
//!
//! A series is fitted into a width-constrained grid (`grid`), downsampled to
//! the chosen column count (`series::aggregate`), and then either turned into
//! a quantized fill matrix (`dot_matrix`) or mapped to coordinates and traced
//! with a smooth cubic path (`line_chart`, `curve`).

pub mod curve;
pub mod dot_matrix;
pub mod error;
pub mod format;
pub mod grid;
pub mod line_chart;
pub mod quantize;
pub mod settings;
pub mod validation;

pub use curve::{build_path, Curve, PathSegment, Point, DEFAULT_SMOOTHING};
pub use dot_matrix::{
    filled_rows, render_dot_matrix, Cell, DotMatrix, DotMatrixConfig, DotMatrixRenderer,
    FillMatrix,
};
pub use error::{PipelineError, PipelineResult};
pub use grid::{compute_grid, GridConstraints, GridSpec, GridTracker};
pub use line_chart::{map_bins, render_line_chart, LineChart, LineChartConfig, LineChartRenderer};
pub use quantize::{normalize, quantize, Domain};
pub use settings::{
    load_widget_settings_file, normalize_widget_settings, parse_widget_settings,
    save_widget_settings_file, DotMatrixSettings, LineChartSettings, SettingsError,
    WidgetSettings,
};
