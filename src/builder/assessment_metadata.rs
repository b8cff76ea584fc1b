//! Image Assessment Metadata (MIX chapter 9).

use super::{
    append_sorted, leaf, leaf_num, leaves, rational_leaf, restricted, restricted_leaf,
};
use crate::error::Result;
use crate::model::{Element, Rational};
use crate::vocab::{
    ASSESSMENT_METADATA_ORDER, BITS_PER_SAMPLE_UNITS, COLOR_ENCODING_ORDER, EXTRA_SAMPLES_TYPES,
    GRAY_RESPONSE_UNITS, SAMPLING_FREQUENCY_PLANES, SAMPLING_FREQUENCY_UNITS, TARGET_DATA_ORDER,
    TARGET_TYPES,
};

/// `ImageAssessmentMetadata`, children sorted as SpatialMetrics,
/// ImageColorEncoding, TargetData.
pub fn image_assessment_metadata(children: Vec<Element>) -> Result<Element> {
    let mut container = Element::new("ImageAssessmentMetadata");
    append_sorted(
        &mut container,
        "ImageAssessmentMetadata",
        ASSESSMENT_METADATA_ORDER,
        children,
    )?;
    Ok(container)
}

/// `SpatialMetrics{samplingFrequencyPlane, samplingFrequencyUnit,
/// xSamplingFrequency, ySamplingFrequency}`.
pub fn spatial_metrics(
    plane: Option<&str>,
    unit: Option<&str>,
    x_sampling: Option<Rational>,
    y_sampling: Option<Rational>,
) -> Result<Element> {
    let mut container = Element::new("SpatialMetrics");
    restricted_leaf(
        &mut container,
        "samplingFrequencyPlane",
        plane,
        SAMPLING_FREQUENCY_PLANES,
    )?;
    restricted_leaf(
        &mut container,
        "samplingFrequencyUnit",
        unit,
        SAMPLING_FREQUENCY_UNITS,
    )?;
    rational_leaf(&mut container, "xSamplingFrequency", x_sampling);
    rational_leaf(&mut container, "ySamplingFrequency", y_sampling);
    Ok(container)
}

/// `ImageColorEncoding`. Every extra samples value must be one of
/// [`EXTRA_SAMPLES_TYPES`]; children are sorted as BitsPerSample,
/// samplesPerPixel, extraSamples, Colormap, GrayResponse, WhitePoint,
/// PrimaryChromaticities.
pub fn color_encoding(
    samples_per_pixel: Option<u32>,
    extra_samples: &[&str],
    children: Vec<Element>,
) -> Result<Element> {
    let mut container = Element::new("ImageColorEncoding");
    leaf_num(&mut container, "samplesPerPixel", samples_per_pixel);
    for &sample in extra_samples.iter().filter(|s| !s.is_empty()) {
        restricted("extraSamples", sample, EXTRA_SAMPLES_TYPES)?;
        container.push(Element::with_text("extraSamples", sample));
    }
    append_sorted(
        &mut container,
        "ImageColorEncoding",
        COLOR_ENCODING_ORDER,
        children,
    )?;
    Ok(container)
}

/// `BitsPerSample{bitsPerSampleValue*, bitsPerSampleUnit}`.
pub fn bits_per_sample(values: &[&str], unit: Option<&str>) -> Result<Element> {
    let mut container = Element::new("BitsPerSample");
    leaves(&mut container, "bitsPerSampleValue", values);
    restricted_leaf(&mut container, "bitsPerSampleUnit", unit, BITS_PER_SAMPLE_UNITS)?;
    Ok(container)
}

/// `Colormap{colormapReference, embeddedColormap}`.
pub fn color_map(reference: Option<&str>, embedded: Option<&str>) -> Element {
    let mut container = Element::new("Colormap");
    leaf(&mut container, "colormapReference", reference);
    leaf(&mut container, "embeddedColormap", embedded);
    container
}

/// `GrayResponse{grayResponseCurve*, grayResponseUnit}`.
pub fn gray_response(curves: &[&str], unit: Option<&str>) -> Result<Element> {
    let mut container = Element::new("GrayResponse");
    leaves(&mut container, "grayResponseCurve", curves);
    restricted_leaf(&mut container, "grayResponseUnit", unit, GRAY_RESPONSE_UNITS)?;
    Ok(container)
}

/// `WhitePoint{whitePointXValue, whitePointYValue}`.
pub fn white_point(x_value: Option<Rational>, y_value: Option<Rational>) -> Element {
    let mut container = Element::new("WhitePoint");
    rational_leaf(&mut container, "whitePointXValue", x_value);
    rational_leaf(&mut container, "whitePointYValue", y_value);
    container
}

/// Chromaticity coordinates of the red, green and blue primaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrimaryChromaticities {
    pub red_x: Option<Rational>,
    pub red_y: Option<Rational>,
    pub green_x: Option<Rational>,
    pub green_y: Option<Rational>,
    pub blue_x: Option<Rational>,
    pub blue_y: Option<Rational>,
}

pub fn primary_chromaticities(values: &PrimaryChromaticities) -> Element {
    let mut container = Element::new("PrimaryChromaticities");
    let leaves = [
        ("primaryChromaticitiesRedX", values.red_x),
        ("primaryChromaticitiesRedY", values.red_y),
        ("primaryChromaticitiesGreenX", values.green_x),
        ("primaryChromaticitiesGreenY", values.green_y),
        ("primaryChromaticitiesBlueX", values.blue_x),
        ("primaryChromaticitiesBlueY", values.blue_y),
    ];
    for (tag, value) in leaves {
        rational_leaf(&mut container, tag, value);
    }
    container
}

/// `TargetData`, children sorted as targetType, TargetID, externalTarget,
/// performanceData. Target types must be `external` or `internal`.
pub fn target_data(
    target_types: &[&str],
    external_targets: &[&str],
    performance_data: &[&str],
    children: Vec<Element>,
) -> Result<Element> {
    let mut container = Element::new("TargetData");
    for &target_type in target_types.iter().filter(|t| !t.is_empty()) {
        restricted("targetType", target_type, TARGET_TYPES)?;
        container.push(Element::with_text("targetType", target_type));
    }
    leaves(&mut container, "externalTarget", external_targets);
    leaves(&mut container, "performanceData", performance_data);
    append_sorted(&mut container, "TargetData", TARGET_DATA_ORDER, children)?;
    Ok(container)
}

/// `TargetID{targetManufacturer, targetName, targetNo, targetMedia}`.
pub fn target_id(
    manufacturer: Option<&str>,
    name: Option<&str>,
    target_no: Option<&str>,
    media: Option<&str>,
) -> Element {
    let mut container = Element::new("TargetID");
    leaf(&mut container, "targetManufacturer", manufacturer);
    leaf(&mut container, "targetName", name);
    leaf(&mut container, "targetNo", target_no);
    leaf(&mut container, "targetMedia", media);
    container
}
