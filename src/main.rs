use raster_filters::filters::{apply_pipeline, create_filter};
use raster_filters::image::io::{load_image, save_image};
use raster_filters::parse::parse_filter_args;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        return Err(usage());
    }
    let input = Path::new(&args[0]);
    let output = Path::new(&args[1]);

    let tokens = parse_filter_args(&args[2..]).map_err(|err| err.to_string())?;
    let filters = tokens
        .iter()
        .map(create_filter)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| err.to_string())?;

    let image = load_image(input).map_err(|err| err.to_string())?;
    let result = apply_pipeline(image, &filters).map_err(|err| err.to_string())?;
    save_image(&result, output).map_err(|err| err.to_string())?;

    println!(
        "Wrote {} ({}x{}, {} filter(s))",
        output.display(),
        result.width(),
        result.height(),
        filters.len()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: raster-filters <input> <output> [filters...]".to_string()
}
