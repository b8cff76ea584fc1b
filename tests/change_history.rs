use nisomix::builder::change_history::*;
use nisomix::builder::mix;
use nisomix::generator::WriteOptions;
use nisomix::model::Element;
use nisomix::MixError;

fn xml(elem: &Element) -> String {
    let opts = WriteOptions {
        indent: None,
        declaration: false,
    };
    elem.to_xml_string(&opts).expect("serialize element")
}

#[test]
fn change_history_sorts_children() {
    let elem = change_history(vec![
        previous_image_metadata(Vec::new()),
        Element::new("ImageProcessing"),
    ])
    .unwrap();
    assert_eq!(
        xml(&elem),
        concat!(
            r#"<mix:ChangeHistory xmlns:mix="http://www.loc.gov/mix/v20">"#,
            "<mix:ImageProcessing/><mix:PreviousImageMetadata/>",
            "</mix:ChangeHistory>"
        )
    );
}

#[test]
fn image_processing_full() {
    let elem = image_processing(
        &ImageProcessing {
            date_time: Some("2019"),
            source_data: Some("foo"),
            agencies: &["acme", "acme2"],
            rationale: Some("test"),
            actions: &["rotate"],
        },
        vec![processing_software(
            Some("my software"),
            Some("1.0"),
            Some("CentOS"),
            Some("7.0"),
        )],
    )
    .unwrap();
    assert_eq!(
        xml(&elem),
        concat!(
            r#"<mix:ImageProcessing xmlns:mix="http://www.loc.gov/mix/v20">"#,
            "<mix:dateTimeProcessed>2019</mix:dateTimeProcessed>",
            "<mix:sourceData>foo</mix:sourceData>",
            "<mix:processingAgency>acme</mix:processingAgency>",
            "<mix:processingAgency>acme2</mix:processingAgency>",
            "<mix:processingRationale>test</mix:processingRationale>",
            "<mix:ProcessingSoftware>",
            "<mix:processingSoftwareName>my software</mix:processingSoftwareName>",
            "<mix:processingSoftwareVersion>1.0</mix:processingSoftwareVersion>",
            "<mix:processingOperatingSystemName>CentOS</mix:processingOperatingSystemName>",
            "<mix:processingOperatingSystemVersion>7.0</mix:processingOperatingSystemVersion>",
            "</mix:ProcessingSoftware>",
            "<mix:processingActions>rotate</mix:processingActions>",
            "</mix:ImageProcessing>"
        )
    );
}

#[test]
fn image_processing_rejects_foreign_child() {
    let err = image_processing(&ImageProcessing::default(), vec![Element::new("Fixity")])
        .unwrap_err();
    assert_eq!(
        err,
        MixError::UnexpectedChild {
            parent: "ImageProcessing",
            child: "Fixity".into()
        }
    );
}

#[test]
fn previous_metadata_holds_a_mix_record() {
    let previous = mix(Vec::new(), None).unwrap();
    let elem = previous_image_metadata(vec![previous.clone()]);
    assert_eq!(elem.children, vec![previous]);
}
