use hourgrid_core::format::format_coord;
use hourgrid_core::{Cell, DotMatrix, FillMatrix, GridSpec, LineChart};
use serde::Serialize;
use series::Bin;

pub fn print_info(message: &str) {
    println!("[hourgrid][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[hourgrid][ERROR]: {message}");
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_grid(grid: &GridSpec) {
    print_info(&format!(
        "columns={} rows={} cell={} gap={} width={}",
        grid.columns,
        grid.rows,
        format_coord(grid.cell_size),
        format_coord(grid.gap),
        format_coord(grid.width())
    ));
}

pub fn print_bins(bins: &[Bin]) {
    if bins.is_empty() {
        print_info("No bins");
        return;
    }
    print_info(&format!("{} bins:", bins.len()));
    for (idx, bin) in bins.iter().enumerate() {
        println!(
            "{idx}\t[{}, {})\t{}",
            bin.source_range.start,
            bin.source_range.end,
            format_coord(bin.average_value)
        );
    }
}

/// One text line per row, top row first.
pub fn matrix_lines(fills: &FillMatrix) -> Vec<String> {
    (0..fills.rows())
        .map(|row| {
            fills
                .row(row)
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => '.',
                    Cell::Filled(idx) => std::char::from_digit(*idx as u32, 36).unwrap_or('#'),
                })
                .collect()
        })
        .collect()
}

pub fn print_matrix(matrix: &DotMatrix) {
    print_grid(&matrix.grid);
    if matrix.fills.columns() == 0 {
        print_info("No samples to render");
        return;
    }
    for line in matrix_lines(&matrix.fills) {
        println!("{line}");
    }
}

pub fn print_curve(chart: &LineChart) {
    print_grid(&chart.grid);
    if chart.curve.is_empty() {
        print_info("No samples to render");
        return;
    }
    println!("{}", chart.curve.to_svg_path());
}
