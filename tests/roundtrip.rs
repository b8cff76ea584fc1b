use camino::Utf8PathBuf;
use nisomix::builder::assessment_metadata::{
    bits_per_sample, color_encoding, image_assessment_metadata, spatial_metrics,
};
use nisomix::builder::capture_metadata::{
    DeviceType, camera_capture_settings, capture_information, device_capture, device_model,
    image_capture_metadata, image_data, parse_datetime_created,
};
use nisomix::builder::change_history::{ImageProcessing, change_history, image_processing};
use nisomix::builder::image_information::{
    ColorProfile, color_profile, image_characteristics, image_information,
    photometric_interpretation,
};
use nisomix::builder::mix;
use nisomix::builder::object_information::{
    digital_object_information, fixity, format_designation, parse_message_digest,
};
use nisomix::vocab::{MIX_SCHEMA_LOCATION, XSI_NS};
use nisomix::{Element, IMAGE_DATA_CONTENTS, MixError, Rational, WriteOptions};
use std::fs::File;

fn sample_record() -> Element {
    let basic = digital_object_information(
        Some("big endian"),
        Some(4096),
        vec![
            fixity(Some("SHA-1"), Some("da39a3ee5e6b4b0d3255bfef95601890afd80709"), None).unwrap(),
            format_designation(Some("image/tiff"), Some("6.0")),
        ],
    )
    .unwrap();

    let photometric = photometric_interpretation(
        Some("RGB"),
        vec![color_profile(&ColorProfile {
            icc_name: Some("Adobe RGB (1998)"),
            ..Default::default()
        })],
    )
    .unwrap();
    let image = image_information(vec![image_characteristics(
        Some(640),
        Some(480),
        vec![photometric],
    )])
    .unwrap();

    let contents = IMAGE_DATA_CONTENTS
        .contents()
        .with("fnumber", "5.6")
        .unwrap()
        .with("exposure_bias_value", Rational::new(-1, 3))
        .unwrap();
    let camera = device_capture(
        DeviceType::Camera,
        Some("Acme & Sons"),
        Some("OneChipColorArea"),
        vec![
            device_model(DeviceType::Camera, Some("X100"), None, Some("42")),
            camera_capture_settings(vec![image_data(&contents).unwrap()]).unwrap(),
        ],
    )
    .unwrap();
    let capture = image_capture_metadata(
        Some("normal*"),
        Some("test <capture>"),
        vec![
            camera,
            capture_information(
                Some("2020-02-20T12:00:00"),
                &["Jane", "John"],
                Some("digital still camera"),
            )
            .unwrap(),
        ],
    )
    .unwrap();

    let assessment = image_assessment_metadata(vec![
        color_encoding(
            Some(3),
            &[],
            vec![bits_per_sample(&["8", "8", "8"], Some("integer")).unwrap()],
        )
        .unwrap(),
        spatial_metrics(
            Some("object plane"),
            Some("in."),
            Some(Rational::new(300, 1)),
            Some(Rational::new(300, 1)),
        )
        .unwrap(),
    ])
    .unwrap();

    let history = change_history(vec![
        image_processing(
            &ImageProcessing {
                date_time: Some("2021-01-01"),
                actions: &["crop"],
                ..Default::default()
            },
            Vec::new(),
        )
        .unwrap(),
    ])
    .unwrap();

    mix(vec![history, assessment, capture, image, basic], None).unwrap()
}

#[test]
fn root_declares_namespaces_and_schema_location() {
    let record = sample_record();
    assert_eq!(
        record.child_names(),
        vec![
            "BasicDigitalObjectInformation",
            "BasicImageInformation",
            "ImageCaptureMetadata",
            "ImageAssessmentMetadata",
            "ChangeHistory"
        ]
    );

    let xml = record
        .to_xml_string(&WriteOptions {
            indent: None,
            declaration: false,
        })
        .unwrap();
    let expected_start = format!(
        r#"<mix:mix xmlns:mix="http://www.loc.gov/mix/v20" xmlns:xsi="{}" xsi:schemaLocation="{}">"#,
        XSI_NS, MIX_SCHEMA_LOCATION
    );
    assert!(xml.starts_with(&expected_start), "{}", xml);
    assert!(xml.contains("<mix:digitalCameraManufacturer>Acme &amp; Sons</mix:digitalCameraManufacturer>"));
    assert!(xml.contains("<mix:methodology>test &lt;capture&gt;</mix:methodology>"));
}

#[test]
fn compact_output_parses_back_equal() {
    let record = sample_record();
    let xml = record
        .to_xml_string(&WriteOptions {
            indent: None,
            declaration: true,
        })
        .unwrap();
    let parsed = Element::from_xml_str(&xml).unwrap();
    assert_eq!(parsed, record);
}

#[test]
fn pretty_output_parses_back_equal() {
    let record = sample_record();
    let xml = record.to_xml_string(&WriteOptions::pretty()).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains("\n  <mix:BasicDigitalObjectInformation>\n"), "{}", xml);

    let parsed = Element::from_xml_str(&xml).unwrap();
    assert_eq!(parsed, record);
    assert_eq!(parse_datetime_created(&parsed), Some("2020-02-20T12:00:00"));
    assert_eq!(
        parse_message_digest(&parsed),
        (Some("SHA-1"), Some("da39a3ee5e6b4b0d3255bfef95601890afd80709"))
    );
    let bias = parsed
        .find("exposureBiasValue")
        .and_then(Element::as_rational);
    assert_eq!(bias, Some(Rational::new(-1, 3)));
}

#[test]
fn write_to_file_and_read_back() {
    let record = sample_record();
    let dir = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(dir.path().join("record.xml")).unwrap();

    let file = File::create(&path).unwrap();
    record.write_to(file, &WriteOptions::pretty()).unwrap();

    let parsed = Element::from_xml_file(&path).unwrap();
    assert_eq!(parsed, record);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.xml")).unwrap();
    let err = Element::from_xml_file(&path).unwrap_err();
    assert!(err.to_string().contains("absent.xml"), "{:#}", err);
}

#[test]
fn nested_namespace_declarations_are_kept() {
    let xml = concat!(
        r#"<mix:mix xmlns:mix="http://www.loc.gov/mix/v20" "#,
        r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
        r#"<mix:ChangeHistory xmlns:premis="info:lc/xmlns/premis-v2" premis:note="x"/>"#,
        "</mix:mix>"
    );
    let parsed = Element::from_xml_str(xml).unwrap();
    assert_eq!(parsed.namespaces.get("xsi").map(String::as_str), Some(XSI_NS));

    let history = parsed.child("ChangeHistory").unwrap();
    assert_eq!(
        history.namespaces.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["premis"]
    );
    assert_eq!(history.attribute("premis:note"), Some("x"));

    let reparsed = Element::from_xml_str(
        &parsed
            .to_xml_string(&WriteOptions {
                indent: None,
                declaration: false,
            })
            .unwrap(),
    )
    .unwrap();
    assert_eq!(reparsed, parsed);
}

fn compact() -> WriteOptions {
    WriteOptions {
        indent: None,
        declaration: false,
    }
}

#[test]
fn control_characters_fail_serialization() {
    let elem = image_capture_metadata(None, Some("a\u{1}b"), Vec::new()).unwrap();
    let err = elem.to_xml_string(&compact()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<MixError>(),
        Some(&MixError::InvalidType {
            element: "methodology".into(),
            expected: "XML 1.0 characters",
            found: "U+0001".into(),
        })
    );

    let mut root = mix(Vec::new(), None).unwrap();
    root.set_attribute("note", "\u{1f}");
    assert!(root.to_xml_string(&compact()).is_err());
}

#[test]
fn carriage_returns_in_text_survive() {
    let elem = image_capture_metadata(None, Some("line1\r\nline2\rline3"), Vec::new()).unwrap();
    for options in [compact(), WriteOptions::pretty()] {
        let xml = elem.to_xml_string(&options).unwrap();
        let parsed = Element::from_xml_str(&xml).unwrap();
        assert_eq!(parsed, elem);
        assert_eq!(
            parsed.child("methodology").and_then(Element::text),
            Some("line1\r\nline2\rline3")
        );
    }
}

#[test]
fn attribute_whitespace_survives() {
    let mut root = mix(Vec::new(), None).unwrap();
    root.set_attribute("note", "tab\there\r\nnext line");
    let xml = root.to_xml_string(&compact()).unwrap();
    assert!(xml.contains(r#"note="tab&#9;here&#13;&#10;next line""#), "{}", xml);

    let parsed = Element::from_xml_str(&xml).unwrap();
    assert_eq!(parsed.attribute("note"), Some("tab\there\r\nnext line"));
    assert_eq!(parsed, root);
}
