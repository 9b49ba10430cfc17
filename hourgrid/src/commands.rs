use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hourgrid", version, about = "Working-hours grid and curve renderer")]
pub struct Cli {
    /// Widget settings file (TOML); built-in defaults when omitted
    #[arg(long = "settings", value_name = "FILE", global = true)]
    pub settings_file: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the grid for a container width and item count
    Grid {
        #[arg(long)]
        width: f64,
        #[arg(long)]
        items: usize,
        #[arg(long, value_enum, default_value_t = Widget::DotMatrix)]
        widget: Widget,
    },
    /// Aggregate a series into a fixed number of bins
    Bins {
        series: PathBuf,
        #[arg(long)]
        bins: usize,
    },
    /// Render a series as a dot matrix
    Matrix {
        series: PathBuf,
        #[arg(long)]
        width: f64,
    },
    /// Render a series as a smoothed line chart path
    Curve {
        series: PathBuf,
        #[arg(long)]
        width: f64,
    },
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Write the default widget settings to a file
    Init { path: PathBuf },
    /// Print the effective widget settings
    Show,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Widget {
    DotMatrix,
    LineChart,
}
