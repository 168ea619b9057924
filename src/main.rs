use linesketch::config;
use linesketch::image::{load_rgb_image, save_gray_image, write_json_file};
use linesketch::pipeline::{sketch_with_trace, SketchReport};
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "linesketch".to_string());
    let config = config::parse_cli(&program)?;

    let input = config
        .input
        .clone()
        .ok_or_else(|| format!("No input image given; see {program} --help"))?;
    let source = load_rgb_image(&input).map_err(|e| e.to_string())?;
    let report =
        sketch_with_trace(&source.as_view(), &config.params).map_err(|e| e.to_string())?;

    let output_path = config
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&input));
    save_gray_image(&report.output, &output_path).map_err(|e| e.to_string())?;

    print_text_summary(&report, &output_path);

    if let Some(path) = &config.report {
        write_json_file(path, &report.trace).map_err(|e| e.to_string())?;
        println!("JSON trace written to {}", path.display());
    }

    Ok(())
}

/// `photo.jpg` becomes `photo_sketch.png` next to it.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sketch".to_string());
    input.with_file_name(format!("{stem}_sketch.png"))
}

fn print_text_summary(report: &SketchReport, output_path: &Path) {
    let trace = &report.trace;
    let total_pixels = trace.input.width * trace.input.height;
    let edge_share = if total_pixels > 0 {
        trace.edge_pixels as f64 / total_pixels as f64 * 100.0
    } else {
        0.0
    };

    println!("Sketch summary");
    println!(
        "  input: {}x{} ({} channels)",
        trace.input.width, trace.input.height, trace.input.channels
    );
    println!(
        "  effective params: ksize={} block={} offset={} polarity={}",
        trace.effective.denoise_ksize,
        trace.effective.block_size,
        trace.effective.threshold_offset,
        trace.effective.polarity
    );
    println!(
        "  edge pixels: {} ({edge_share:.2}% of {total_pixels})",
        trace.edge_pixels
    );
    print!("  timings (ms):");
    for stage in &trace.timings.stages {
        print!(" {}={:.3}", stage.label, stage.elapsed_ms);
    }
    println!(" total={:.3}", trace.timings.total_ms);
    println!("  sketch written to {}", output_path.display());
}
