//! Basic Image Information (MIX chapter 7).

use super::{
    append_sorted, leaf, leaf_num, plain_container, present, rational_leaf, restricted_leaf,
};
use crate::error::Result;
use crate::model::{Element, Rational};
use crate::vocab::{
    COMPONENT_INTERPRETATION_TYPES, DJVU_FORMATS, IMAGE_INFORMATION_ORDER,
    PHOTOMETRIC_INTERPRETATION_ORDER, YCBCR_POSITIONING_TYPES, YCBCR_SUBSAMPLE_TYPES,
};

/// `BasicImageInformation`, children sorted as BasicImageCharacteristics,
/// SpecialFormatCharacteristics.
pub fn image_information(children: Vec<Element>) -> Result<Element> {
    let mut container = Element::new("BasicImageInformation");
    append_sorted(
        &mut container,
        "BasicImageInformation",
        IMAGE_INFORMATION_ORDER,
        children,
    )?;
    Ok(container)
}

/// `BasicImageCharacteristics{imageWidth, imageHeight, …children}`.
///
/// ```
/// use nisomix::builder::image_information::image_characteristics;
///
/// let elem = image_characteristics(Some(200), Some(400), Vec::new());
/// assert_eq!(elem.child_names(), vec!["imageWidth", "imageHeight"]);
/// assert_eq!(elem.child("imageWidth").and_then(|e| e.text()), Some("200"));
/// ```
pub fn image_characteristics(
    width: Option<u64>,
    height: Option<u64>,
    children: Vec<Element>,
) -> Element {
    let mut container = Element::new("BasicImageCharacteristics");
    leaf_num(&mut container, "imageWidth", width);
    leaf_num(&mut container, "imageHeight", height);
    container.children.extend(children);
    container
}

/// `PhotometricInterpretation`, children sorted as colorSpace, ColorProfile,
/// YCbCr, ReferenceBlackWhite.
pub fn photometric_interpretation(
    color_space: Option<&str>,
    children: Vec<Element>,
) -> Result<Element> {
    let mut container = Element::new("PhotometricInterpretation");
    leaf(&mut container, "colorSpace", color_space);
    append_sorted(
        &mut container,
        "PhotometricInterpretation",
        PHOTOMETRIC_INTERPRETATION_ORDER,
        children,
    )?;
    Ok(container)
}

/// Content of a `ColorProfile` element.
#[derive(Debug, Clone, Default)]
pub struct ColorProfile<'a> {
    pub icc_name: Option<&'a str>,
    pub icc_version: Option<&'a str>,
    pub icc_uri: Option<&'a str>,
    pub local_name: Option<&'a str>,
    pub local_url: Option<&'a str>,
    /// Base64-encoded profile data.
    pub embedded_profile: Option<&'a str>,
}

/// `ColorProfile{IccProfile, LocalProfile, embeddedProfile}`. The two
/// profile containers are only written when one of their leaves is present.
pub fn color_profile(profile: &ColorProfile<'_>) -> Element {
    let mut container = Element::new("ColorProfile");

    if [profile.icc_name, profile.icc_version, profile.icc_uri]
        .into_iter()
        .any(|v| present(v).is_some())
    {
        let mut icc = Element::new("IccProfile");
        leaf(&mut icc, "iccProfileName", profile.icc_name);
        leaf(&mut icc, "iccProfileVersion", profile.icc_version);
        leaf(&mut icc, "iccProfileURI", profile.icc_uri);
        container.push(icc);
    }

    if [profile.local_name, profile.local_url]
        .into_iter()
        .any(|v| present(v).is_some())
    {
        let mut local = Element::new("LocalProfile");
        leaf(&mut local, "localProfileName", profile.local_name);
        leaf(&mut local, "localProfileURL", profile.local_url);
        container.push(local);
    }

    leaf(&mut container, "embeddedProfile", profile.embedded_profile);
    container
}

/// Content of a `YCbCr` element. Subsampling factors are restricted to
/// `1`, `2`, `4` and positioning to `1`, `2`.
#[derive(Debug, Clone, Default)]
pub struct YCbCr<'a> {
    pub subsample_horiz: Option<&'a str>,
    pub subsample_vert: Option<&'a str>,
    pub positioning: Option<&'a str>,
    pub luma_red: Option<Rational>,
    pub luma_green: Option<Rational>,
    pub luma_blue: Option<Rational>,
}

pub fn ycbcr(args: &YCbCr<'_>) -> Result<Element> {
    let mut container = Element::new("YCbCr");

    if present(args.subsample_horiz).is_some() || present(args.subsample_vert).is_some() {
        let mut subsampling = Element::new("YCbCrSubSampling");
        restricted_leaf(
            &mut subsampling,
            "yCbCrSubsampleHoriz",
            args.subsample_horiz,
            YCBCR_SUBSAMPLE_TYPES,
        )?;
        restricted_leaf(
            &mut subsampling,
            "yCbCrSubsampleVert",
            args.subsample_vert,
            YCBCR_SUBSAMPLE_TYPES,
        )?;
        container.push(subsampling);
    }

    restricted_leaf(
        &mut container,
        "yCbCrPositioning",
        args.positioning,
        YCBCR_POSITIONING_TYPES,
    )?;

    if args.luma_red.is_some() || args.luma_green.is_some() || args.luma_blue.is_some() {
        let mut coefficients = Element::new("YCbCrCoefficients");
        rational_leaf(&mut coefficients, "lumaRed", args.luma_red);
        rational_leaf(&mut coefficients, "lumaGreen", args.luma_green);
        rational_leaf(&mut coefficients, "lumaBlue", args.luma_blue);
        container.push(coefficients);
    }

    Ok(container)
}

/// `ReferenceBlackWhite{Component…}`.
pub fn ref_black_white(children: Vec<Element>) -> Element {
    plain_container("ReferenceBlackWhite", children)
}

/// `Component{componentPhotometricInterpretation, footroom, headroom}`.
pub fn component(
    interpretation: Option<&str>,
    footroom: Option<Rational>,
    headroom: Option<Rational>,
) -> Result<Element> {
    let mut container = Element::new("Component");
    restricted_leaf(
        &mut container,
        "componentPhotometricInterpretation",
        interpretation,
        COMPONENT_INTERPRETATION_TYPES,
    )?;
    rational_leaf(&mut container, "footroom", footroom);
    rational_leaf(&mut container, "headroom", headroom);
    Ok(container)
}

/// `SpecialFormatCharacteristics{JPEG2000 | MrSID | Djvu}`.
pub fn format_characteristics(children: Vec<Element>) -> Element {
    plain_container("SpecialFormatCharacteristics", children)
}

/// Content of a `JPEG2000` element.
#[derive(Debug, Clone, Default)]
pub struct Jpeg2000<'a> {
    pub codec: Option<&'a str>,
    pub codec_version: Option<&'a str>,
    pub codestream_profile: Option<&'a str>,
    pub compliance_class: Option<&'a str>,
    pub tile_width: Option<u64>,
    pub tile_height: Option<u64>,
    pub quality_layers: Option<u64>,
    pub resolution_levels: Option<u64>,
}

/// `JPEG2000{CodecCompliance, EncodingOptions{Tiles, qualityLayers,
/// resolutionLevels}}`.
pub fn jpeg2000(args: &Jpeg2000<'_>) -> Element {
    let mut container = Element::new("JPEG2000");

    if [
        args.codec,
        args.codec_version,
        args.codestream_profile,
        args.compliance_class,
    ]
    .into_iter()
    .any(|v| present(v).is_some())
    {
        let mut compliance = Element::new("CodecCompliance");
        leaf(&mut compliance, "codec", args.codec);
        leaf(&mut compliance, "codecVersion", args.codec_version);
        leaf(&mut compliance, "codestreamProfile", args.codestream_profile);
        leaf(&mut compliance, "complianceClass", args.compliance_class);
        container.push(compliance);
    }

    let tiles = (args.tile_width.is_some() || args.tile_height.is_some()).then(|| {
        let mut tiles = Element::new("Tiles");
        leaf_num(&mut tiles, "tileWidth", args.tile_width);
        leaf_num(&mut tiles, "tileHeight", args.tile_height);
        tiles
    });

    if tiles.is_some() || args.quality_layers.is_some() || args.resolution_levels.is_some() {
        let mut options = Element::new("EncodingOptions");
        options.children.extend(tiles);
        leaf_num(&mut options, "qualityLayers", args.quality_layers);
        leaf_num(&mut options, "resolutionLevels", args.resolution_levels);
        container.push(options);
    }

    container
}

/// `MrSID{zoomLevels}`.
pub fn mrsid(zoom_levels: Option<u64>) -> Element {
    let mut container = Element::new("MrSID");
    leaf_num(&mut container, "zoomLevels", zoom_levels);
    container
}

/// `Djvu{djvuFormat}`, the format being `indirect` or `bundled`.
pub fn djvu(djvu_format: Option<&str>) -> Result<Element> {
    let mut container = Element::new("Djvu");
    restricted_leaf(&mut container, "djvuFormat", djvu_format, DJVU_FORMATS)?;
    Ok(container)
}
