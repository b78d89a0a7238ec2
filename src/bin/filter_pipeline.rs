use raster_filters::filters::{create_filter, FilterToken};
use raster_filters::image::io::{load_image, save_image, write_json_file};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Deserialize)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub filters: Vec<FilterToken>,
    #[serde(default)]
    pub report: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<PipelineConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let filters = config
        .filters
        .iter()
        .map(create_filter)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;

    let image = load_image(&config.input).map_err(|e| e.to_string())?;
    let input_width = image.width();
    let input_height = image.height();

    let total = Instant::now();
    let mut current = image;
    let mut stages = Vec::with_capacity(filters.len());
    for filter in &filters {
        let started = Instant::now();
        current = filter.apply(&current).map_err(|e| e.to_string())?;
        let elapsed_ms = started.elapsed().as_secs_f64() * 1e3;
        println!(
            "{} -> {}x{} in {elapsed_ms:.3} ms",
            filter.name(),
            current.width(),
            current.height()
        );
        stages.push(StageSummary {
            filter: filter.name().to_string(),
            elapsed_ms,
        });
    }
    let total_ms = total.elapsed().as_secs_f64() * 1e3;

    save_image(&current, &config.output).map_err(|e| e.to_string())?;
    println!(
        "Saved {} ({}x{})",
        config.output.display(),
        current.width(),
        current.height()
    );

    if let Some(report_path) = &config.report {
        let summary = PipelineSummary {
            input_width,
            input_height,
            output_width: current.width(),
            output_height: current.height(),
            total_ms,
            stages,
        };
        write_json_file(report_path, &summary).map_err(|e| e.to_string())?;
        println!("Saved report to {}", report_path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: filter_pipeline <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StageSummary {
    filter: String,
    elapsed_ms: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PipelineSummary {
    input_width: usize,
    input_height: usize,
    output_width: usize,
    output_height: usize,
    total_ms: f64,
    stages: Vec<StageSummary>,
}
