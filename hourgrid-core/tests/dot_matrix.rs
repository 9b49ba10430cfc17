use hourgrid_core::{
    filled_rows, quantize, render_dot_matrix, Cell, Domain, DotMatrixConfig, DotMatrixRenderer,
    GridConstraints,
};
use series::Series;

fn hours_config(rows: usize) -> DotMatrixConfig {
    DotMatrixConfig {
        rows,
        grid: GridConstraints {
            min_cell: 10.0,
            max_cell: 18.0,
            gap: 4.0,
        },
        domain: Domain { min: 0.0, max: 10.0 },
        palette_size: 4,
    }
}

#[test]
fn thirty_equal_days_in_three_hundred_pixels() {
    let series = Series::from_values([5.0; 30]).unwrap();
    let matrix = render_dot_matrix(&series, 300.0, &hours_config(6)).unwrap();

    // floor((300 + 4) / (10 + 4)) = 21 columns fit at the minimum cell size.
    assert_eq!(matrix.grid.columns, 21);
    assert_eq!(matrix.grid.rows, 6);
    assert_eq!(matrix.bins.len(), 21);
    assert_eq!(matrix.fills.columns(), 21);

    let (backed, trailing): (Vec<_>, Vec<_>) = matrix
        .bins
        .iter()
        .enumerate()
        .partition(|(_, bin)| !bin.is_empty());
    assert_eq!(backed.len(), 15);
    for (column, bin) in &backed {
        assert_eq!(bin.average_value, 5.0);
        assert_eq!(matrix.fills.column_height(*column), 3);
    }
    for (column, bin) in &trailing {
        assert_eq!(bin.average_value, 0.0);
        assert_eq!(matrix.fills.column_height(*column), 0);
    }
}

#[test]
fn short_series_maps_one_column_per_day() {
    let series = Series::from_values([2.0, 4.0, 6.0, 8.0, 10.0]).unwrap();
    let matrix = render_dot_matrix(&series, 300.0, &hours_config(5)).unwrap();
    assert_eq!(matrix.fills.columns(), 5);
    let heights: Vec<usize> = (0..5).map(|c| matrix.fills.column_height(c)).collect();
    assert_eq!(heights, vec![1, 2, 3, 4, 5]);
}

#[test]
fn fill_height_matches_normalized_bin_value() {
    let values: Vec<f64> = (0..120).map(|idx| ((idx * 7) % 13) as f64).collect();
    let series = Series::from_values(values).unwrap();
    let config = hours_config(7);
    for width in [40.0, 90.0, 233.0, 480.0, 1200.0] {
        let matrix = render_dot_matrix(&series, width, &config).unwrap();
        for (column, bin) in matrix.bins.iter().enumerate() {
            let expected = filled_rows(bin.average_value, &config.domain, config.rows);
            assert_eq!(matrix.fills.column_height(column), expected);

            let color = quantize(bin.average_value, &config.domain, config.palette_size);
            for row in 0..config.rows {
                let cell = matrix.fills.get(row, column).unwrap();
                if config.rows - row <= expected {
                    assert_eq!(cell, Cell::Filled(color));
                } else {
                    assert_eq!(cell, Cell::Empty);
                }
            }
        }
    }
}

#[test]
fn empty_series_renders_nothing() {
    let matrix = render_dot_matrix(&Series::empty(), 300.0, &hours_config(7)).unwrap();
    assert_eq!(matrix.grid.columns, 1);
    assert_eq!(matrix.grid.cell_size, 10.0);
    assert!(matrix.bins.is_empty());
    assert_eq!(matrix.fills.columns(), 0);
    assert_eq!(matrix.fills.filled_count(), 0);
}

#[test]
fn renderer_survives_a_resize_storm() {
    let series = Series::from_values((0..90).map(|idx| (idx % 10) as f64)).unwrap();
    let mut renderer = DotMatrixRenderer::new(hours_config(7), Some(12.0)).unwrap();
    assert_eq!(renderer.config(), &hours_config(7));

    let before_layout = renderer.render(&series, 0.0).unwrap();
    assert_eq!(before_layout.grid.columns, 1);
    assert_eq!(before_layout.grid.cell_size, 12.0);

    let mut last_columns = 0;
    for width in [320.0, 0.0, 321.0, 0.0, 0.0, 640.0, 160.0, 0.0] {
        let matrix = renderer.render(&series, width).unwrap();
        assert!(matrix.grid.columns >= 1);
        assert!(matrix.bins.len() <= series.len());
        if width == 0.0 {
            assert_eq!(matrix.grid.columns, last_columns);
        }
        last_columns = matrix.grid.columns;
    }
    assert_eq!(renderer.last_grid().map(|g| g.columns), Some(last_columns));
}

#[test]
fn renderer_rejects_fallback_cell_outside_bounds() {
    assert!(DotMatrixRenderer::new(hours_config(7), Some(100.0)).is_err());
    assert!(DotMatrixRenderer::new(hours_config(7), Some(9.0)).is_err());
}
