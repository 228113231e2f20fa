use stick_detector::config::stick_demo;
use stick_detector::io::{load_rgb_image, load_segments, save_rgb_image, write_json_file};
use stick_detector::render::{blank_canvas, draw_result};
use stick_detector::StickDetector;
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = stick_demo::load_config(Path::new(&config_path))?;

    let detector = StickDetector::new(config.params.clone()).map_err(|e| e.to_string())?;
    let raw = load_segments(&config.input)?;
    log::info!("Loaded {} raw segments from {}", raw.len(), config.input.display());

    let report = detector.process_with_diagnostics(&raw);
    if report.result.merged.is_empty() {
        println!("No sticks found.");
    }
    for line in report.summary_lines() {
        println!("{line}");
    }

    write_json_file(&config.output.report_json, &report)?;
    println!("Saved report to {}", config.output.report_json.display());

    if let Some(overlay_path) = &config.output.overlay_image {
        let mut canvas = match &config.background {
            Some(path) => load_rgb_image(path)?,
            None => blank_canvas(&report.result, 20),
        };
        draw_result(&mut canvas, &report.result, &config.style);
        save_rgb_image(&canvas, overlay_path)?;
        println!("Saved overlay to {}", overlay_path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: stick_demo <config.json>".to_string()
}
