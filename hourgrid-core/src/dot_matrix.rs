use crate::error::PipelineResult;
use crate::grid::{compute_grid, GridConstraints, GridSpec, GridTracker};
use crate::quantize::{normalize, quantize, Domain};
use crate::validation::Validator;
use log::debug;
use serde::{Deserialize, Serialize};
use series::{aggregate, Bin, Series};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotMatrixConfig {
    pub rows: usize,
    pub grid: GridConstraints,
    pub domain: Domain,
    pub palette_size: usize,
}

impl DotMatrixConfig {
    pub fn validate(&self) -> PipelineResult<()> {
        Validator::at_least_one("rows", self.rows)?;
        Validator::at_least_one("palette_size", self.palette_size)?;
        self.grid.validate()?;
        self.domain.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Empty,
    Filled(usize),
}

impl Cell {
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

/// Row-major fill grid, row 0 at the top. Fills grow upward from the last row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FillMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl FillMatrix {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells.get(row * self.columns + column).copied()
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        if row >= self.rows {
            return &[];
        }
        &self.cells[row * self.columns..(row + 1) * self.columns]
    }

    /// Filled cells in `column`, counted from the bottom.
    pub fn column_height(&self, column: usize) -> usize {
        (0..self.rows)
            .filter(|row| self.get(*row, column).is_some_and(|c| c.is_filled()))
            .count()
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotMatrix {
    pub grid: GridSpec,
    pub bins: Vec<Bin>,
    pub fills: FillMatrix,
}

/// Number of cells lit for `value`, `round(t * rows)` clamped to `0..=rows`.
pub fn filled_rows(value: f64, domain: &Domain, rows: usize) -> usize {
    let lit = (normalize(value, domain) * rows as f64).round();
    (lit.max(0.0) as usize).min(rows)
}

/// Runs the full dot-matrix pipeline for one render pass.
pub fn render_dot_matrix(
    series: &Series,
    container_width: f64,
    config: &DotMatrixConfig,
) -> PipelineResult<DotMatrix> {
    config.validate()?;
    let grid = compute_grid(container_width, series.len(), &config.grid)?;
    fill_grid(series, grid, config)
}

fn fill_grid(
    series: &Series,
    grid: GridSpec,
    config: &DotMatrixConfig,
) -> PipelineResult<DotMatrix> {
    let grid = GridSpec {
        rows: config.rows,
        ..grid
    };
    let bins = aggregate(series, grid.columns)?;
    let rows = config.rows;
    let columns = bins.len();

    let mut cells = vec![Cell::Empty; rows * columns];
    for (column, bin) in bins.iter().enumerate() {
        let lit = filled_rows(bin.average_value, &config.domain, rows);
        let color = quantize(bin.average_value, &config.domain, config.palette_size);
        for row in (rows - lit)..rows {
            cells[row * columns + column] = Cell::Filled(color);
        }
    }
    debug!(
        "dot matrix rendered samples={} columns={} rows={rows}",
        series.len(),
        columns
    );

    Ok(DotMatrix {
        grid,
        bins,
        fills: FillMatrix {
            rows,
            columns,
            cells,
        },
    })
}

/// A dot-matrix widget instance: config plus the last known grid.
#[derive(Debug, Clone)]
pub struct DotMatrixRenderer {
    config: DotMatrixConfig,
    tracker: GridTracker,
}

impl DotMatrixRenderer {
    pub fn new(config: DotMatrixConfig, fallback_cell: Option<f64>) -> PipelineResult<Self> {
        config.validate()?;
        let tracker = GridTracker::new(config.grid, fallback_cell)?;
        Ok(Self { config, tracker })
    }

    pub fn config(&self) -> &DotMatrixConfig {
        &self.config
    }

    pub fn last_grid(&self) -> Option<GridSpec> {
        self.tracker.last()
    }

    /// Re-renders after a resize or data change. A width of 0 reuses the
    /// previous grid.
    pub fn render(&mut self, series: &Series, container_width: f64) -> PipelineResult<DotMatrix> {
        let grid = self.tracker.resize(container_width, series.len())?;
        fill_grid(series, grid, &self.config)
    }
}
