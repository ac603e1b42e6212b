//! Command-line interface for color_sense
//!
//! Loads an image, names the color of the pixel at the given coordinates,
//! and optionally reports colorblindness simulations and the dominant
//! palette. JSON goes to stdout for programmatic use, a short summary to
//! stderr for humans.

use std::{env, path::Path, process};

use color_sense::{
    dominant_colors, load_image, pixel_at, simulate_pixel, ColorCatalog, DominantColorConfig,
    Region, SimulationMode,
};

/// Parsed command line, prior to any I/O
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    simulate_modes: Vec<SimulationMode>,
    with_palette: bool,
    csv_path: Option<String>,
    positional: Vec<String>,
    help: bool,
}

/// Parse arguments after the program name
///
/// Anything starting with `-` that is not a known option is rejected so
/// typos like `-s` fail loudly instead of being taken for an image path.
fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--simulate" => {
                let mode = args
                    .get(i + 1)
                    .ok_or_else(|| "--simulate requires a mode".to_string())?;
                parsed
                    .simulate_modes
                    .push(mode.parse::<SimulationMode>().map_err(|e| e.to_string())?);
                i += 1;
            }
            "--palette" => parsed.with_palette = true,
            "--catalog" => {
                let path = args
                    .get(i + 1)
                    .ok_or_else(|| "--catalog requires a CSV path".to_string())?;
                parsed.csv_path = Some(path.clone());
                i += 1;
            }
            "--help" | "-h" => parsed.help = true,
            arg if !arg.starts_with('-') => parsed.positional.push(arg.to_string()),
            arg => {
                return Err(format!(
                    "Unknown option: {}\nUse --help for usage information",
                    arg
                ))
            }
        }
        i += 1;
    }

    Ok(parsed)
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let parsed = match parse_args(&args[1..]) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("Error: {}", message);
            process::exit(1);
        }
    };
    if parsed.help {
        print_help(&args[0]);
        process::exit(0);
    }

    let CliArgs {
        simulate_modes,
        with_palette,
        csv_path,
        positional,
        ..
    } = parsed;

    if positional.len() != 3 {
        print_help(&args[0]);
        process::exit(1);
    }

    let image_path = Path::new(&positional[0]);
    let x: u32 = parse_coordinate(&positional[1], "x");
    let y: u32 = parse_coordinate(&positional[2], "y");

    let image = match load_image(image_path) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Failed to load image: {}", e);
            process::exit(1);
        }
    };

    let pixel = match pixel_at(&image, x, y) {
        Ok(pixel) => pixel,
        Err(e) => {
            eprintln!("Failed to read pixel: {}", e);
            process::exit(1);
        }
    };

    let nearest = {
        let result = match csv_path {
            Some(ref path) => ColorCatalog::from_csv_file(Path::new(path))
                .and_then(|catalog| catalog.nearest_match(pixel).map(|m| owned(&m))),
            None => color_sense::lookup(pixel),
        };
        match result {
            Ok(nearest) => nearest,
            Err(e) => {
                eprintln!("Lookup failed: {}", e);
                process::exit(1);
            }
        }
    };

    let mut report = serde_json::json!({
        "pixel": { "x": x, "y": y, "rgb": pixel },
        "name": nearest.name,
        "hex": nearest.hex,
        "distance": nearest.distance,
    });

    if !simulate_modes.is_empty() {
        let mut simulations = serde_json::Map::new();
        for mode in &simulate_modes {
            let simulated = simulate_pixel(pixel, *mode);
            simulations.insert(mode.to_string(), serde_json::json!(simulated));
        }
        report["simulations"] = serde_json::Value::Object(simulations);
    }

    if with_palette {
        match dominant_colors(&image, Region::full(&image), &DominantColorConfig::default()) {
            Ok(palette) => match serde_json::to_value(&palette) {
                Ok(value) => report["dominant_colors"] = value,
                Err(e) => eprintln!("Warning: failed to serialize palette: {}", e),
            },
            Err(e) => {
                eprintln!("Palette extraction failed: {}", e);
                process::exit(1);
            }
        }
    }

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            process::exit(1);
        }
    }

    eprintln!();
    eprintln!("Pixel ({}, {}): RGB({}, {}, {})", x, y, pixel[0], pixel[1], pixel[2]);
    eprintln!("Nearest color: {} ({}), distance {}", nearest.name, nearest.hex, nearest.distance);
    for mode in &simulate_modes {
        let s = simulate_pixel(pixel, *mode);
        eprintln!("  {}: RGB({}, {}, {})", mode, s[0], s[1], s[2]);
    }
}

fn owned(m: &color_sense::NearestMatch<'_>) -> color_sense::LookupResult {
    color_sense::LookupResult {
        name: m.entry.name.clone(),
        hex: m.entry.hex.clone(),
        distance: m.distance,
    }
}

fn parse_coordinate(raw: &str, name: &str) -> u32 {
    match raw.parse::<u32>() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Error: {} must be a non-negative integer, got {:?}", name, raw);
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path> <x> <y>", program_name);
    eprintln!();
    eprintln!("Name the color of a pixel and optionally simulate colorblindness.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --simulate MODE   Add a simulation (protanopia, deuteranopia, tritanopia);");
    eprintln!("                    may be given more than once");
    eprintln!("  --palette         Include the dominant-color palette of the image");
    eprintln!("  --catalog FILE    Use a CSV reference table instead of the built-in catalog");
    eprintln!("  --help, -h        Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} photo.jpg 120 85", program_name);
    eprintln!("  {} --simulate deuteranopia --palette photo.png 40 40", program_name);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_positionals_and_options() {
        let parsed = parse_args(&args(&[
            "--simulate",
            "deuteranopia",
            "--palette",
            "photo.png",
            "40",
            "41",
        ]))
        .unwrap();
        assert_eq!(parsed.simulate_modes, vec![SimulationMode::Deuteranopia]);
        assert!(parsed.with_palette);
        assert_eq!(parsed.positional, args(&["photo.png", "40", "41"]));
        assert!(!parsed.help);
    }

    #[test]
    fn test_parse_args_rejects_single_dash_typo() {
        let err = parse_args(&args(&["-s", "photo.png", "1", "2"])).unwrap_err();
        assert!(err.contains("Unknown option: -s"), "{}", err);
    }

    #[test]
    fn test_parse_args_rejects_unknown_double_dash() {
        let err = parse_args(&args(&["--debug", "photo.png", "1", "2"])).unwrap_err();
        assert!(err.contains("--debug"), "{}", err);
    }

    #[test]
    fn test_parse_args_help_short_form_still_works() {
        assert!(parse_args(&args(&["-h"])).unwrap().help);
        assert!(parse_args(&args(&["--help"])).unwrap().help);
    }

    #[test]
    fn test_parse_args_missing_option_values() {
        assert!(parse_args(&args(&["--simulate"])).is_err());
        assert!(parse_args(&args(&["--catalog"])).is_err());
    }

    #[test]
    fn test_parse_args_bad_mode_surfaces_parse_error() {
        let err = parse_args(&args(&["--simulate", "monochromacy"])).unwrap_err();
        assert!(err.contains("monochromacy"), "{}", err);
    }
}
