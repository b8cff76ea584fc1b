use nisomix::builder::image_information::*;
use nisomix::generator::WriteOptions;
use nisomix::model::{Element, Rational};
use nisomix::MixError;

fn xml(elem: &Element) -> String {
    let opts = WriteOptions {
        indent: None,
        declaration: false,
    };
    elem.to_xml_string(&opts).expect("serialize element")
}

#[test]
fn image_information_sorts_children() {
    let elem = image_information(vec![
        format_characteristics(Vec::new()),
        image_characteristics(None, None, Vec::new()),
    ])
    .unwrap();
    assert_eq!(
        elem.child_names(),
        vec!["BasicImageCharacteristics", "SpecialFormatCharacteristics"]
    );
    assert!(matches!(
        image_information(vec![Element::new("Djvu")]),
        Err(MixError::UnexpectedChild { parent: "BasicImageInformation", .. })
    ));
}

#[test]
fn image_characteristics_width_then_height() {
    let elem = image_characteristics(
        Some(200),
        Some(400),
        vec![photometric_interpretation(None, Vec::new()).unwrap()],
    );
    assert_eq!(
        xml(&elem),
        concat!(
            r#"<mix:BasicImageCharacteristics xmlns:mix="http://www.loc.gov/mix/v20">"#,
            "<mix:imageWidth>200</mix:imageWidth>",
            "<mix:imageHeight>400</mix:imageHeight>",
            "<mix:PhotometricInterpretation/>",
            "</mix:BasicImageCharacteristics>"
        )
    );
}

#[test]
fn photometric_interpretation_sorts_children() {
    let elem = photometric_interpretation(
        Some("RGB"),
        vec![
            ref_black_white(Vec::new()),
            ycbcr(&YCbCr::default()).unwrap(),
            color_profile(&ColorProfile::default()),
        ],
    )
    .unwrap();
    assert_eq!(
        elem.child_names(),
        vec!["colorSpace", "ColorProfile", "YCbCr", "ReferenceBlackWhite"]
    );
}

#[test]
fn color_profile_sub_containers() {
    let elem = color_profile(&ColorProfile {
        icc_name: Some("sRGB"),
        icc_version: Some("2"),
        icc_uri: Some("http://example.com"),
        local_name: Some("local"),
        local_url: Some("http://example.com"),
        embedded_profile: Some("foo"),
    });
    assert_eq!(
        xml(&elem),
        concat!(
            r#"<mix:ColorProfile xmlns:mix="http://www.loc.gov/mix/v20">"#,
            "<mix:IccProfile><mix:iccProfileName>sRGB</mix:iccProfileName>",
            "<mix:iccProfileVersion>2</mix:iccProfileVersion>",
            "<mix:iccProfileURI>http://example.com</mix:iccProfileURI></mix:IccProfile>",
            "<mix:LocalProfile><mix:localProfileName>local</mix:localProfileName>",
            "<mix:localProfileURL>http://example.com</mix:localProfileURL></mix:LocalProfile>",
            "<mix:embeddedProfile>foo</mix:embeddedProfile>",
            "</mix:ColorProfile>"
        )
    );

    let local_only = color_profile(&ColorProfile {
        local_name: Some("local"),
        ..Default::default()
    });
    assert_eq!(local_only.child_names(), vec!["LocalProfile"]);
}

#[test]
fn ycbcr_structure() {
    let elem = ycbcr(&YCbCr {
        subsample_horiz: Some("1"),
        subsample_vert: Some("2"),
        positioning: Some("1"),
        luma_red: Some(Rational::new(299, 1000)),
        luma_green: Some(Rational::new(587, 1000)),
        luma_blue: Some(Rational::new(114, 1000)),
    })
    .unwrap();
    assert_eq!(
        elem.child_names(),
        vec!["YCbCrSubSampling", "yCbCrPositioning", "YCbCrCoefficients"]
    );
    let coefficients = elem.child("YCbCrCoefficients").unwrap();
    assert_eq!(coefficients.child_names(), vec!["lumaRed", "lumaGreen", "lumaBlue"]);
    assert_eq!(
        coefficients.child("lumaGreen").and_then(Element::as_rational),
        Some(Rational::new(587, 1000))
    );
}

#[test]
fn ycbcr_restricted_values() {
    let cases = [
        (
            YCbCr {
                subsample_horiz: Some("3"),
                ..Default::default()
            },
            "yCbCrSubsampleHoriz",
        ),
        (
            YCbCr {
                subsample_vert: Some("8"),
                ..Default::default()
            },
            "yCbCrSubsampleVert",
        ),
        (
            YCbCr {
                positioning: Some("4"),
                ..Default::default()
            },
            "yCbCrPositioning",
        ),
    ];
    for (args, bad) in cases {
        match ycbcr(&args) {
            Err(MixError::InvalidValue { element, .. }) => assert_eq!(element, bad),
            other => panic!("expected InvalidValue for {bad}, got {other:?}"),
        }
    }
}

#[test]
fn reference_black_white_components() {
    let elem = ref_black_white(vec![
        component(Some("R"), Some(Rational::new(0, 1)), Some(Rational::new(255, 1))).unwrap(),
        component(Some("G"), None, None).unwrap(),
    ]);
    assert_eq!(elem.child_names(), vec!["Component", "Component"]);
    assert_eq!(
        elem.children[0].child_names(),
        vec!["componentPhotometricInterpretation", "footroom", "headroom"]
    );
    assert!(matches!(
        component(Some("X"), None, None),
        Err(MixError::InvalidValue { element: "componentPhotometricInterpretation", .. })
    ));
}

#[test]
fn jpeg2000_structure() {
    let elem = jpeg2000(&Jpeg2000 {
        codec: Some("JP2"),
        codec_version: Some("1"),
        codestream_profile: Some("P1"),
        compliance_class: Some("C1"),
        tile_width: Some(256),
        tile_height: Some(256),
        quality_layers: Some(10),
        resolution_levels: Some(5),
    });
    assert_eq!(
        xml(&elem),
        concat!(
            r#"<mix:JPEG2000 xmlns:mix="http://www.loc.gov/mix/v20">"#,
            "<mix:CodecCompliance><mix:codec>JP2</mix:codec>",
            "<mix:codecVersion>1</mix:codecVersion>",
            "<mix:codestreamProfile>P1</mix:codestreamProfile>",
            "<mix:complianceClass>C1</mix:complianceClass></mix:CodecCompliance>",
            "<mix:EncodingOptions><mix:Tiles><mix:tileWidth>256</mix:tileWidth>",
            "<mix:tileHeight>256</mix:tileHeight></mix:Tiles>",
            "<mix:qualityLayers>10</mix:qualityLayers>",
            "<mix:resolutionLevels>5</mix:resolutionLevels></mix:EncodingOptions>",
            "</mix:JPEG2000>"
        )
    );

    let layers_only = jpeg2000(&Jpeg2000 {
        quality_layers: Some(3),
        ..Default::default()
    });
    assert_eq!(layers_only.child_names(), vec!["EncodingOptions"]);
    assert_eq!(layers_only.children[0].child_names(), vec!["qualityLayers"]);
}

#[test]
fn special_formats() {
    let elem = format_characteristics(vec![mrsid(Some(0)), djvu(Some("bundled")).unwrap()]);
    assert_eq!(elem.child_names(), vec!["MrSID", "Djvu"]);
    assert_eq!(
        elem.children[0].child("zoomLevels").and_then(Element::text),
        Some("0")
    );
    assert!(matches!(
        djvu(Some("foo")),
        Err(MixError::InvalidValue { element: "djvuFormat", .. })
    ));
    assert!(djvu(None).unwrap().children.is_empty());
}
