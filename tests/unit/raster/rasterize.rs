use std::path::PathBuf;

use super::*;

fn tree(svg: &str) -> usvg::Tree {
    usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default()).unwrap()
}

#[test]
fn rasterize_stretches_to_requested_size() {
    let t = tree(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
  <rect x="0" y="0" width="10" height="10" fill="#ff0000"/>
</svg>"##,
    );
    let rgba = rasterize_tree_to_rgba8(&t, 20, 5).unwrap();
    assert_eq!(rgba.len(), 20 * 5 * 4);
    assert_eq!(&rgba[..4], &[255, 0, 0, 255]);
    let last = rgba.len() - 4;
    assert_eq!(&rgba[last..], &[255, 0, 0, 255]);
}

#[test]
fn rasterize_output_is_demultiplied() {
    let t = tree(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4">
  <rect x="0" y="0" width="4" height="4" fill="#ffffff" fill-opacity="0.5"/>
</svg>"##,
    );
    let rgba = rasterize_tree_to_rgba8(&t, 4, 4).unwrap();
    assert_eq!(rgba[0], 255);
    assert!((rgba[3] as i32 - 128).abs() <= 1);
}

#[test]
fn rasterize_rejects_zero_size() {
    let t = tree(r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"/>"#);
    assert!(matches!(
        rasterize_tree_to_rgba8(&t, 0, 4),
        Err(NinePatchError::InvalidDimensions(_))
    ));
}

#[test]
fn inkscape_args_export_whole_page_at_target_size() {
    let args = InkscapeRasterizer::export_args(
        Path::new("in/icon.svg"),
        Path::new("out/icon.9.png"),
        48,
        32,
    );
    assert_eq!(
        args,
        vec![
            "--export-area-page",
            "--export-type=png",
            "--export-width=48",
            "--export-height=32",
            "--export-filename=out/icon.9.png",
            "in/icon.svg",
        ]
    );
}

#[test]
fn inkscape_spawn_failure_is_a_raster_error() {
    let r = InkscapeRasterizer::with_program("svg-ninepatch-no-such-inkscape");
    let err = r
        .render(
            Path::new("tests/data/reference.svg"),
            &PathBuf::from("target").join("never.png"),
            8,
            8,
        )
        .unwrap_err();
    assert!(matches!(err, NinePatchError::Raster(_)));
}

#[cfg(unix)]
#[test]
fn inkscape_nonzero_exit_is_a_raster_error() {
    let r = InkscapeRasterizer::with_program("false");
    let err = r
        .render(
            Path::new("tests/data/reference.svg"),
            &PathBuf::from("target").join("never.png"),
            8,
            8,
        )
        .unwrap_err();
    match err {
        NinePatchError::Raster(msg) => assert!(msg.contains("false exited with status"), "{msg}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn inkscape_exports_requested_size() {
    if !is_inkscape_on_path() {
        eprintln!("skipping: inkscape not on PATH");
        return;
    }

    let dir = PathBuf::from("target").join("unit_rasterize");
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("inkscape.png");
    let _ = std::fs::remove_file(&out);

    InkscapeRasterizer::default()
        .render(Path::new("tests/data/reference.svg"), &out, 48, 32)
        .unwrap();

    let img = image::open(&out).unwrap();
    assert_eq!((img.width(), img.height()), (48, 32));
}
