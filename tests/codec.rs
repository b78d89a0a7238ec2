mod common;

use common::synthetic_image::numbered_image;
use raster_filters::image::io::{load_image, save_image, write_json_file};
use raster_filters::Error;
use serde_json::Value;
use tempfile::tempdir;

#[test]
fn png_round_trip_preserves_pixels() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.png");
    let img = numbered_image(7, 5);

    save_image(&img, &path).expect("png encode should succeed");
    let back = load_image(&path).expect("png decode should succeed");
    assert_eq!(back, img);
}

#[test]
fn bmp_round_trip_preserves_pixels() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.bmp");
    let img = numbered_image(6, 4);

    save_image(&img, &path).expect("bmp encode should succeed");
    let back = load_image(&path).expect("bmp decode should succeed");
    assert_eq!(back, img);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("out.png");
    let img = numbered_image(3, 3);

    save_image(&img, &path).expect("nested save should succeed");
    assert!(path.exists(), "encoded file should exist at {path:?}");
}

#[test]
fn missing_input_reports_a_read_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.png");
    assert!(matches!(
        load_image(&path),
        Err(Error::ReadImage { .. })
    ));
}

#[test]
fn json_report_output_parses_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("reports").join("run.json");

    #[derive(serde::Serialize)]
    struct Sample {
        stages: usize,
        total_ms: f64,
    }

    write_json_file(
        &path,
        &Sample {
            stages: 3,
            total_ms: 12.5,
        },
    )
    .expect("report write should succeed");

    let data = std::fs::read_to_string(&path).unwrap();
    let value: Value = serde_json::from_str(&data).unwrap();
    assert_eq!(value["stages"], 3);
}
