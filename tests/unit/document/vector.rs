use super::*;

const REFERENCE: &str = include_str!("../../data/reference.svg");

fn svg_with_paths(paths: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50">{paths}</svg>"#
    )
}

#[test]
fn reads_canvas_size() {
    let doc = VectorDocument::from_svg_str("reference.svg", REFERENCE, ParseMode::Strict).unwrap();
    assert_eq!(doc.canvas_width(), 864);
    assert_eq!(doc.canvas_height(), 864);
    assert_eq!(doc.source_path(), Path::new("reference.svg"));
}

#[test]
fn reads_all_four_annotations() {
    let doc = VectorDocument::from_svg_str("reference.svg", REFERENCE, ParseMode::Strict).unwrap();
    assert_eq!(
        doc.padding_x().unwrap(),
        PathRegion::new(188.0, 895.0, 440.0, 0.0)
    );
    assert_eq!(
        doc.padding_y().unwrap(),
        PathRegion::new(900.0, 130.0, 0.0, 579.0)
    );
    assert_eq!(
        doc.stretch_x().unwrap(),
        PathRegion::new(100.0, 31.0, 200.0, 0.0)
    );
    assert_eq!(
        doc.stretch_y().unwrap(),
        PathRegion::new(30.0, 120.0, 0.0, 400.0)
    );
}

#[test]
fn dimension_text_uses_leading_integer() {
    let text = r#"<svg xmlns="http://www.w3.org/2000/svg" width="864.7" height="120px"/>"#;
    let doc = VectorDocument::from_svg_str("x.svg", text, ParseMode::Strict).unwrap();
    assert_eq!(doc.canvas_width(), 864);
    assert_eq!(doc.canvas_height(), 120);
}

#[test]
fn missing_or_non_numeric_dimensions_fail() {
    let no_height = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10"/>"#;
    assert!(matches!(
        VectorDocument::from_svg_str("x.svg", no_height, ParseMode::Strict),
        Err(NinePatchError::MissingAttribute(_))
    ));

    let non_numeric = r#"<svg xmlns="http://www.w3.org/2000/svg" width="auto" height="10"/>"#;
    assert!(matches!(
        VectorDocument::from_svg_str("x.svg", non_numeric, ParseMode::Strict),
        Err(NinePatchError::MissingAttribute(_))
    ));
}

#[test]
fn malformed_xml_is_a_read_error() {
    assert!(matches!(
        VectorDocument::from_svg_str("x.svg", "<svg", ParseMode::Strict),
        Err(NinePatchError::DocumentRead(_))
    ));
}

#[test]
fn unreadable_file_is_a_read_error() {
    assert!(matches!(
        VectorDocument::load("tests/data/does-not-exist.svg"),
        Err(NinePatchError::DocumentRead(_))
    ));
}

#[test]
fn strict_missing_annotation_is_named() {
    let text = svg_with_paths(r#"<path id="padding-x" d="m 1,2 3,0"/>"#);
    let doc = VectorDocument::from_svg_str("x.svg", &text, ParseMode::Strict).unwrap();
    match doc.stretch_x() {
        Err(NinePatchError::MissingAnnotation(name)) => assert_eq!(name, "stretch-x"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn lenient_missing_annotation_is_zero_region() {
    let text = svg_with_paths(r#"<path id="padding-x" d="m 1,2 3,0"/>"#);
    let doc = VectorDocument::from_svg_str("x.svg", &text, ParseMode::Lenient).unwrap();
    assert_eq!(doc.stretch_x().unwrap(), PathRegion::default());
    assert_eq!(doc.padding_x().unwrap(), PathRegion::new(1.0, 2.0, 3.0, 0.0));
}

#[test]
fn duplicate_ids_are_rejected_in_strict_mode() {
    let text = svg_with_paths(
        r#"<path id="stretch-x" d="m 1,2 3,0"/><g><path id="stretch-x" d="m 5,6 7,0"/></g>"#,
    );
    let strict = VectorDocument::from_svg_str("x.svg", &text, ParseMode::Strict).unwrap();
    assert!(matches!(
        strict.stretch_x(),
        Err(NinePatchError::MissingAnnotation(_))
    ));

    let lenient = VectorDocument::from_svg_str("x.svg", &text, ParseMode::Lenient).unwrap();
    assert_eq!(lenient.stretch_x().unwrap(), PathRegion::new(1.0, 2.0, 3.0, 0.0));
}

#[test]
fn path_without_data_is_malformed() {
    let text = svg_with_paths(r#"<path id="stretch-y"/>"#);
    let doc = VectorDocument::from_svg_str("x.svg", &text, ParseMode::Strict).unwrap();
    assert!(matches!(
        doc.stretch_y(),
        Err(NinePatchError::MalformedAnnotation { .. })
    ));
}

#[test]
fn paths_outside_svg_namespace_are_ignored() {
    let text = r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:x="urn:other" width="10" height="10">
        <x:path id="stretch-x" d="m 1,2 3,0"/>
    </svg>"#;
    let doc = VectorDocument::from_svg_str("x.svg", text, ParseMode::Strict).unwrap();
    assert!(matches!(
        doc.stretch_x(),
        Err(NinePatchError::MissingAnnotation(_))
    ));
}

#[test]
fn signed_dimensions_follow_integer_prefix_rules() {
    let plus = r#"<svg xmlns="http://www.w3.org/2000/svg" width="+864" height="864"/>"#;
    let doc = VectorDocument::from_svg_str("x.svg", plus, ParseMode::Strict).unwrap();
    assert_eq!(doc.canvas_width(), 864);

    for width in ["-864", "0", "99999999999"] {
        let text = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="864"/>"#
        );
        assert!(
            matches!(
                VectorDocument::from_svg_str("x.svg", &text, ParseMode::Strict),
                Err(NinePatchError::InvalidDimensions(_))
            ),
            "width {width:?}"
        );
    }

    let sign_only = r#"<svg xmlns="http://www.w3.org/2000/svg" width="-" height="864"/>"#;
    assert!(matches!(
        VectorDocument::from_svg_str("x.svg", sign_only, ParseMode::Strict),
        Err(NinePatchError::MissingAttribute(_))
    ));
}
