use grid_outliner::config::outline::load_config;
use grid_outliner::image::io::{load_rgba_image, place_on_canvas, save_rgba_image, write_json_file};
use grid_outliner::Outliner;
use std::env;
use std::path::Path;

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

    let source = load_rgba_image(&config.input)?;
    let mut sheet = match config.canvas {
        Some(canvas) => place_on_canvas(&source, canvas.width, canvas.height),
        None => source,
    };
    let (width, height) = (sheet.width(), sheet.height());

    let outliner = Outliner::new(config.to_outline_params());
    let report = outliner
        .process(sheet.as_bytes_mut(), width, height)
        .map_err(|e| e.to_string())?;

    save_rgba_image(&sheet, &config.output.image)?;
    println!(
        "Bordered {} of {} cells ({}x{}, cell {}) in {:.3} ms -> {}",
        report.synthesis.occupied_cells,
        report.columns * report.rows,
        width,
        height,
        report.cell_size,
        report.latency_ms,
        config.output.image.display()
    );

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: grid_outliner <config.json>".to_string()
}
