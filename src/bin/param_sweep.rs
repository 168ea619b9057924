use linesketch::diagnostics::SketchTrace;
use linesketch::image::{load_rgb_image, save_gray_image, write_json_file};
use linesketch::params::{Polarity, SketchParams};
use linesketch::pipeline::sketch_with_trace;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SweepToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub sweep: SweepGrid,
    pub output: SweepOutputConfig,
}

/// Parameter combinations to render; the full cross product is swept.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SweepGrid {
    pub denoise_ksizes: Vec<i32>,
    pub block_sizes: Vec<i32>,
    pub threshold_offsets: Vec<i32>,
    pub polarity: Polarity,
}

impl Default for SweepGrid {
    fn default() -> Self {
        Self {
            denoise_ksizes: vec![3, 5, 9],
            block_sizes: vec![9, 15, 25],
            threshold_offsets: vec![5, 9, 15],
            polarity: Polarity::DarkOnLight,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SweepOutputConfig {
    pub dir: PathBuf,
    #[serde(default)]
    pub summary_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<SweepToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    // One decode serves every combination.
    let source = load_rgb_image(&config.input).map_err(|e| e.to_string())?;
    let view = source.as_view();

    fs::create_dir_all(&config.output.dir)
        .map_err(|e| format!("Failed to create {}: {e}", config.output.dir.display()))?;

    let mut entries = Vec::new();
    for &ksize in &config.sweep.denoise_ksizes {
        for &block in &config.sweep.block_sizes {
            for &offset in &config.sweep.threshold_offsets {
                let params = SketchParams {
                    denoise_ksize: ksize,
                    block_size: block,
                    threshold_offset: offset,
                    polarity: config.sweep.polarity,
                };
                let report = sketch_with_trace(&view, &params).map_err(|e| e.to_string())?;
                let file = format!("sketch_k{ksize}_b{block}_c{offset}.png");
                let path = config.output.dir.join(&file);
                save_gray_image(&report.output, &path).map_err(|e| e.to_string())?;
                entries.push(SweepEntry {
                    file,
                    trace: report.trace,
                });
            }
        }
    }

    println!(
        "Rendered {} sketches from {} into {}",
        entries.len(),
        config.input.display(),
        config.output.dir.display()
    );

    if let Some(path) = &config.output.summary_json {
        let summary = SweepSummary {
            input: config.input.clone(),
            count: entries.len(),
            entries,
        };
        write_json_file(path, &summary).map_err(|e| e.to_string())?;
        println!("Sweep summary written to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: param_sweep <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SweepEntry {
    file: String,
    trace: SketchTrace,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SweepSummary {
    input: PathBuf,
    count: usize,
    entries: Vec<SweepEntry>,
}
