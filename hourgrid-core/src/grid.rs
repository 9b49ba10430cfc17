use crate::error::{PipelineError, PipelineResult};
use crate::validation::Validator;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Bounds on the cell size and the spacing between cells, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConstraints {
    pub min_cell: f64,
    pub max_cell: f64,
    pub gap: f64,
}

impl GridConstraints {
    pub fn validate(&self) -> PipelineResult<()> {
        Validator::positive("min_cell", self.min_cell)?;
        Validator::positive("max_cell", self.max_cell)?;
        Validator::non_negative("gap", self.gap)?;
        Validator::ordered_bounds("min_cell", self.min_cell, "max_cell", self.max_cell)
    }

    /// Checks that a configured cell size lies in `[min_cell, max_cell]`.
    pub fn check_cell(&self, name: &str, cell: f64) -> PipelineResult<f64> {
        Validator::positive(name, cell)?;
        if cell < self.min_cell || cell > self.max_cell {
            return Err(PipelineError::invalid(format!(
                "{name} ({cell}) must lie within {}..={}",
                self.min_cell, self.max_cell
            )));
        }
        Ok(cell)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub columns: usize,
    pub rows: usize,
    pub cell_size: f64,
    pub gap: f64,
}

impl GridSpec {
    fn single(cell_size: f64, gap: f64) -> Self {
        Self {
            columns: 1,
            rows: 1,
            cell_size,
            gap,
        }
    }

    /// Horizontal extent of the grid, gaps included.
    pub fn width(&self) -> f64 {
        let columns = self.columns as f64;
        columns * self.cell_size + (columns - 1.0).max(0.0) * self.gap
    }

    /// Left edge of column `column`.
    pub fn column_offset(&self, column: usize) -> f64 {
        column as f64 * (self.cell_size + self.gap)
    }
}

/// Picks the column count and cell size for `item_count` cells in a
/// container `container_width` pixels wide.
///
/// The column count is the largest that still fits at `min_cell`, capped at
/// `item_count`; the cell then grows to share the remaining width, up to
/// `max_cell`. An empty item list yields a single `min_cell` column.
pub fn compute_grid(
    container_width: f64,
    item_count: usize,
    constraints: &GridConstraints,
) -> PipelineResult<GridSpec> {
    constraints.validate()?;
    if !container_width.is_finite() || container_width <= 0.0 {
        return Err(PipelineError::invalid(format!(
            "container width must be positive, got {container_width}"
        )));
    }
    let GridConstraints {
        min_cell,
        max_cell,
        gap,
    } = *constraints;

    if item_count == 0 {
        return Ok(GridSpec::single(min_cell, gap));
    }

    let max_cols_for_min = (((container_width + gap) / (min_cell + gap)).floor() as usize).max(1);
    let columns = item_count.min(max_cols_for_min);
    let cell_size = ((container_width - (columns as f64 - 1.0) * gap) / columns as f64)
        .floor()
        .clamp(min_cell, max_cell);
    let rows = item_count.div_ceil(columns);

    Ok(GridSpec {
        columns,
        rows: rows.max(1),
        cell_size,
        gap,
    })
}

/// Owns the last grid computed for one widget instance.
///
/// Hosts often report a width of 0 before layout or while a container is
/// hidden. The tracker answers those events with the previous spec (or the
/// configured fallback) so the rendered grid does not collapse and flicker.
#[derive(Debug, Clone)]
pub struct GridTracker {
    constraints: GridConstraints,
    fallback_cell: Option<f64>,
    last: Option<GridSpec>,
}

impl GridTracker {
    /// Fails when the constraints are invalid or the fallback cell lies
    /// outside `[min_cell, max_cell]`.
    pub fn new(constraints: GridConstraints, fallback_cell: Option<f64>) -> PipelineResult<Self> {
        constraints.validate()?;
        if let Some(cell) = fallback_cell {
            constraints.check_cell("fallback_cell", cell)?;
        }
        Ok(Self {
            constraints,
            fallback_cell,
            last: None,
        })
    }

    pub fn constraints(&self) -> &GridConstraints {
        &self.constraints
    }

    pub fn last(&self) -> Option<GridSpec> {
        self.last
    }

    pub fn resize(&mut self, container_width: f64, item_count: usize) -> PipelineResult<GridSpec> {
        if container_width.is_finite() && container_width > 0.0 {
            let spec = compute_grid(container_width, item_count, &self.constraints)?;
            debug!(
                "grid recomputed width={container_width} items={item_count} columns={} cell={}",
                spec.columns, spec.cell_size
            );
            self.last = Some(spec);
            return Ok(spec);
        }

        if let Some(spec) = self.last {
            warn!("container width {container_width} not usable, keeping previous grid");
            return Ok(spec);
        }
        if let Some(cell) = self.fallback_cell {
            warn!("container width {container_width} not usable, using fallback cell {cell}");
            return Ok(GridSpec::single(cell, self.constraints.gap));
        }
        Err(PipelineError::invalid(format!(
            "container width {container_width} with no previous grid and no fallback cell"
        )))
    }
}
