use crate::curve::{build_path, Curve, Point};
use crate::error::PipelineResult;
use crate::grid::{compute_grid, GridConstraints, GridSpec, GridTracker};
use crate::quantize::{normalize, Domain};
use crate::validation::Validator;
use log::debug;
use serde::{Deserialize, Serialize};
use series::{aggregate, Bin, Series};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    pub height: f64,
    pub grid: GridConstraints,
    pub domain: Domain,
    pub smoothing: f64,
}

impl LineChartConfig {
    pub fn validate(&self) -> PipelineResult<()> {
        Validator::positive("height", self.height)?;
        Validator::non_negative("smoothing", self.smoothing)?;
        self.grid.validate()?;
        self.domain.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub grid: GridSpec,
    pub bins: Vec<Bin>,
    pub points: Vec<Point>,
    pub curve: Curve,
}

/// Places each bin at the centre of its column; `y` grows downward, so the
/// domain maximum sits at 0 and the minimum at `height`.
pub fn map_bins(bins: &[Bin], grid: &GridSpec, domain: &Domain, height: f64) -> Vec<Point> {
    bins.iter()
        .enumerate()
        .map(|(column, bin)| {
            let x = grid.column_offset(column) + grid.cell_size / 2.0;
            let y = height * (1.0 - normalize(bin.average_value, domain));
            Point::new(x, y)
        })
        .collect()
}

pub fn render_line_chart(
    series: &Series,
    container_width: f64,
    config: &LineChartConfig,
) -> PipelineResult<LineChart> {
    config.validate()?;
    let grid = compute_grid(container_width, series.len(), &config.grid)?;
    trace_grid(series, grid, config)
}

fn trace_grid(
    series: &Series,
    grid: GridSpec,
    config: &LineChartConfig,
) -> PipelineResult<LineChart> {
    let bins = aggregate(series, grid.columns)?;
    let points = map_bins(&bins, &grid, &config.domain, config.height);
    let curve = build_path(&points, config.smoothing);
    debug!(
        "line chart rendered samples={} points={} segments={}",
        series.len(),
        points.len(),
        curve.segments.len()
    );
    Ok(LineChart {
        grid: GridSpec { rows: 1, ..grid },
        bins,
        points,
        curve,
    })
}

/// A line-chart widget instance: config plus the last known grid.
#[derive(Debug, Clone)]
pub struct LineChartRenderer {
    config: LineChartConfig,
    tracker: GridTracker,
}

impl LineChartRenderer {
    pub fn new(config: LineChartConfig, fallback_cell: Option<f64>) -> PipelineResult<Self> {
        config.validate()?;
        let tracker = GridTracker::new(config.grid, fallback_cell)?;
        Ok(Self { config, tracker })
    }

    pub fn config(&self) -> &LineChartConfig {
        &self.config
    }

    pub fn last_grid(&self) -> Option<GridSpec> {
        self.tracker.last()
    }

    pub fn render(&mut self, series: &Series, container_width: f64) -> PipelineResult<LineChart> {
        let grid = self.tracker.resize(container_width, series.len())?;
        trace_grid(series, grid, &self.config)
    }
}
