use crate::commands::*;
use crate::output::*;
use hourgrid_core::{
    compute_grid, load_widget_settings_file, save_widget_settings_file, WidgetSettings,
};
use log::debug;
use series::{aggregate, Series};
use std::path::Path;

type HandlerResult = Result<(), Box<dyn std::error::Error>>;

pub fn load_settings(path: Option<&Path>) -> Result<WidgetSettings, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            debug!("loading widget settings from {}", path.display());
            load_widget_settings_file(path).map_err(|err| {
                format!("Failed to load settings '{}': {err}", path.display()).into()
            })
        }
        None => Ok(WidgetSettings::default()),
    }
}

fn load_series(path: &Path) -> Result<Series, Box<dyn std::error::Error>> {
    let series = Series::load_from_file(path)
        .map_err(|err| format!("Failed to load series '{}': {err}", path.display()))?;
    debug!("loaded {} samples from {}", series.len(), path.display());
    Ok(series)
}

pub fn handle_command(cli: Cli) -> HandlerResult {
    let settings = load_settings(cli.settings_file.as_deref())?;
    let json = cli.json;
    match cli.command {
        Commands::Grid {
            width,
            items,
            widget,
        } => {
            let constraints = match widget {
                Widget::DotMatrix => settings.dot_matrix.grid(),
                Widget::LineChart => settings.line_chart.grid(),
            };
            let grid = compute_grid(width, items, &constraints)?;
            if json {
                print_json(&grid)?;
            } else {
                print_grid(&grid);
            }
        }
        Commands::Bins { series, bins } => {
            let series = load_series(&series)?;
            let bins = aggregate(&series, bins)?;
            if json {
                print_json(&bins)?;
            } else {
                print_bins(&bins);
            }
        }
        Commands::Matrix { series, width } => {
            let series = load_series(&series)?;
            let mut renderer = settings.dot_matrix.renderer()?;
            debug!(
                "dot matrix rows={} palette={}",
                renderer.config().rows,
                renderer.config().palette_size
            );
            let matrix = renderer.render(&series, width)?;
            if json {
                print_json(&matrix)?;
            } else {
                print_matrix(&matrix);
            }
        }
        Commands::Curve { series, width } => {
            let series = load_series(&series)?;
            let mut renderer = settings.line_chart.renderer()?;
            debug!(
                "line chart height={} smoothing={}",
                renderer.config().height,
                renderer.config().smoothing
            );
            let chart = renderer.render(&series, width)?;
            if json {
                print_json(&chart)?;
            } else {
                print_curve(&chart);
            }
        }
        Commands::Settings { command } => handle_settings_command(command, &settings, json)?,
    }
    Ok(())
}

fn handle_settings_command(
    command: SettingsCommands,
    settings: &WidgetSettings,
    json: bool,
) -> HandlerResult {
    match command {
        SettingsCommands::Init { path } => {
            if path.exists() {
                return Err(format!("Refusing to overwrite '{}'", path.display()).into());
            }
            save_widget_settings_file(&path, &WidgetSettings::default())?;
            print_info(&format!("Wrote default settings to {}", path.display()));
        }
        SettingsCommands::Show => {
            if json {
                print_json(settings)?;
            } else {
                print!("{}", toml::to_string_pretty(settings)?);
            }
        }
    }
    Ok(())
}
