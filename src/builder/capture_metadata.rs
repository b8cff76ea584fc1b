//! Image Capture Metadata (MIX chapter 8).

use super::{
    append_sorted, leaf, leaf_num, leaves, present, rational_leaf, restricted, restricted_leaf,
    sort_children,
};
use crate::contents::{Contents, GPS_DATA_CONTENTS, IMAGE_DATA_CONTENTS};
use crate::error::{MixError, Result};
use crate::model::{Element, Rational};
use crate::vocab::{
    CAMERA_CAPTURE_ORDER, CAMERA_CAPTURE_SETTINGS_ORDER, CAMERA_SENSOR_TYPES,
    CAPTURE_DEVICE_TYPES, DEVICE_TYPES, DIMENSION_UNITS, GPS_DATA_ORDER, IMAGE_CAPTURE_ORDER,
    IMAGE_DATA_ORDER, OPTICAL_RESOLUTION_UNITS, ORIENTATION_TYPES, SCANNER_CAPTURE_ORDER,
    SCANNER_SENSOR_TYPES, SOURCE_INFORMATION_ORDER,
};
use std::fmt;
use std::str::FromStr;

/// `ImageCaptureMetadata`, children sorted as SourceInformation,
/// GeneralCaptureInformation, ScannerCapture, DigitalCameraCapture,
/// orientation, methodology.
pub fn image_capture_metadata(
    orientation: Option<&str>,
    methodology: Option<&str>,
    children: Vec<Element>,
) -> Result<Element> {
    let mut container = Element::new("ImageCaptureMetadata");
    restricted_leaf(&mut container, "orientation", orientation, ORIENTATION_TYPES)?;
    leaf(&mut container, "methodology", methodology);
    append_sorted(
        &mut container,
        "ImageCaptureMetadata",
        IMAGE_CAPTURE_ORDER,
        children,
    )?;
    Ok(container)
}

/// `SourceInformation`, children sorted as sourceType, SourceID, SourceSize.
pub fn source_information(source_type: Option<&str>, children: Vec<Element>) -> Result<Element> {
    let mut container = Element::new("SourceInformation");
    leaf(&mut container, "sourceType", source_type);
    append_sorted(
        &mut container,
        "SourceInformation",
        SOURCE_INFORMATION_ORDER,
        children,
    )?;
    Ok(container)
}

/// `SourceID{sourceIDType, sourceIDValue}`.
pub fn source_id(id_type: Option<&str>, id_value: Option<&str>) -> Element {
    let mut container = Element::new("SourceID");
    leaf(&mut container, "sourceIDType", id_type);
    leaf(&mut container, "sourceIDValue", id_value);
    container
}

/// Physical dimensions of the source, each with a unit of `in.` or `mm`.
#[derive(Debug, Clone, Default)]
pub struct SourceSize<'a> {
    pub x_value: Option<f64>,
    pub x_unit: Option<&'a str>,
    pub y_value: Option<f64>,
    pub y_unit: Option<&'a str>,
    pub z_value: Option<f64>,
    pub z_unit: Option<&'a str>,
}

/// `SourceSize{SourceXDimension, SourceYDimension, SourceZDimension}`; a
/// dimension is only written when its value or unit is present. Values must
/// be finite.
pub fn source_size(size: &SourceSize<'_>) -> Result<Element> {
    let mut container = Element::new("SourceSize");
    let dimensions = [
        ("X", size.x_value, size.x_unit),
        ("Y", size.y_value, size.y_unit),
        ("Z", size.z_value, size.z_unit),
    ];
    for (axis, value, unit) in dimensions {
        if value.is_none() && present(unit).is_none() {
            continue;
        }
        if let Some(v) = value.filter(|v| !v.is_finite()) {
            return Err(MixError::InvalidType {
                element: format!("source{axis}DimensionValue"),
                expected: "finite decimal",
                found: v.to_string(),
            });
        }
        let mut dimension = Element::new(format!("Source{axis}Dimension"));
        leaf_num(
            &mut dimension,
            &format!("source{axis}DimensionValue"),
            value,
        );
        if let Some(unit) = present(unit) {
            restricted(dimension_unit_tag(axis), unit, DIMENSION_UNITS)?;
            dimension.push(Element::with_text(
                format!("source{axis}DimensionUnit"),
                unit,
            ));
        }
        container.push(dimension);
    }
    Ok(container)
}

fn dimension_unit_tag(axis: &str) -> &'static str {
    match axis {
        "X" => "sourceXDimensionUnit",
        "Y" => "sourceYDimensionUnit",
        _ => "sourceZDimensionUnit",
    }
}

/// `GeneralCaptureInformation{dateTimeCreated, imageProducer*, captureDevice}`.
pub fn capture_information(
    created: Option<&str>,
    producers: &[&str],
    device: Option<&str>,
) -> Result<Element> {
    let mut container = Element::new("GeneralCaptureInformation");
    leaf(&mut container, "dateTimeCreated", created);
    leaves(&mut container, "imageProducer", producers);
    restricted_leaf(&mut container, "captureDevice", device, CAPTURE_DEVICE_TYPES)?;
    Ok(container)
}

/// The two kinds of capture device MIX distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    Scanner,
    Camera,
}

impl DeviceType {
    /// Prefix of the device's lower-case leaves, e.g. `scannerManufacturer`.
    fn leaf_prefix(self) -> &'static str {
        match self {
            DeviceType::Scanner => "scanner",
            DeviceType::Camera => "digitalCamera",
        }
    }

    fn capture_tag(self) -> &'static str {
        match self {
            DeviceType::Scanner => "ScannerCapture",
            DeviceType::Camera => "DigitalCameraCapture",
        }
    }

    fn model_tag(self) -> &'static str {
        match self {
            DeviceType::Scanner => "ScannerModel",
            DeviceType::Camera => "DigitalCameraModel",
        }
    }
}

impl FromStr for DeviceType {
    type Err = MixError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "scanner" => Ok(DeviceType::Scanner),
            "camera" => Ok(DeviceType::Camera),
            other => Err(MixError::InvalidValue {
                element: "deviceType",
                value: other.to_string(),
                accepted: DEVICE_TYPES,
            }),
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeviceType::Scanner => "scanner",
            DeviceType::Camera => "camera",
        })
    }
}

/// `ScannerCapture` or `DigitalCameraCapture` depending on `device_type`.
///
/// The sensor is checked against the scanner or camera sensor set, and all
/// children are sorted into the device's schema sequence.
pub fn device_capture(
    device_type: DeviceType,
    manufacturer: Option<&str>,
    sensor: Option<&str>,
    children: Vec<Element>,
) -> Result<Element> {
    let tag = device_type.capture_tag();
    let mut container = Element::new(tag);
    leaf(
        &mut container,
        &format!("{}Manufacturer", device_type.leaf_prefix()),
        manufacturer,
    );
    let order = match device_type {
        DeviceType::Scanner => {
            restricted_leaf(&mut container, "scannerSensor", sensor, SCANNER_SENSOR_TYPES)?;
            SCANNER_CAPTURE_ORDER
        }
        DeviceType::Camera => {
            restricted_leaf(&mut container, "cameraSensor", sensor, CAMERA_SENSOR_TYPES)?;
            CAMERA_CAPTURE_ORDER
        }
    };
    append_sorted(&mut container, tag, order, children)?;
    Ok(container)
}

/// `ScannerModel{scannerModelName, scannerModelNumber, scannerModelSerialNo}`
/// or the `DigitalCameraModel` equivalent.
pub fn device_model(
    device_type: DeviceType,
    name: Option<&str>,
    number: Option<&str>,
    serial_no: Option<&str>,
) -> Element {
    let prefix = device_type.leaf_prefix();
    let mut container = Element::new(device_type.model_tag());
    leaf(&mut container, &format!("{prefix}ModelName"), name);
    leaf(&mut container, &format!("{prefix}ModelNumber"), number);
    leaf(&mut container, &format!("{prefix}ModelSerialNo"), serial_no);
    container
}

/// `MaximumOpticalResolution{xOpticalResolution, yOpticalResolution,
/// opticalResolutionUnit}`.
pub fn max_optical_resolution(
    x_resolution: Option<u32>,
    y_resolution: Option<u32>,
    unit: Option<&str>,
) -> Result<Element> {
    let mut container = Element::new("MaximumOpticalResolution");
    leaf_num(&mut container, "xOpticalResolution", x_resolution);
    leaf_num(&mut container, "yOpticalResolution", y_resolution);
    restricted_leaf(
        &mut container,
        "opticalResolutionUnit",
        unit,
        OPTICAL_RESOLUTION_UNITS,
    )?;
    Ok(container)
}

/// `ScanningSystemSoftware{scanningSoftwareName, scanningSoftwareVersionNo}`.
pub fn scanning_software(name: Option<&str>, version: Option<&str>) -> Element {
    let mut container = Element::new("ScanningSystemSoftware");
    leaf(&mut container, "scanningSoftwareName", name);
    leaf(&mut container, "scanningSoftwareVersionNo", version);
    container
}

/// `CameraCaptureSettings`, children sorted as ImageData, GPSData.
pub fn camera_capture_settings(mut children: Vec<Element>) -> Result<Element> {
    sort_children(
        "CameraCaptureSettings",
        CAMERA_CAPTURE_SETTINGS_ORDER,
        &mut children,
    )?;
    let mut container = Element::new("CameraCaptureSettings");
    container.children = children;
    Ok(container)
}

const IMAGE_DATA_TEXT_TAGS: &[(&str, &str)] = &[
    ("fnumber", "fNumber"),
    ("exposure_time", "exposureTime"),
    ("exposure_program", "exposureProgram"),
    ("isospeed_ratings", "isoSpeedRatings"),
    ("exif_version", "exifVersion"),
    ("metering_mode", "meteringMode"),
    ("light_source", "lightSource"),
    ("flash", "flash"),
    ("focal_length", "focalLength"),
    ("back_light", "backLight"),
    ("exposure_index", "exposureIndex"),
    ("sensing_method", "sensingMethod"),
    ("cfa_pattern", "cfaPattern"),
    ("auto_focus", "autoFocus"),
];

const IMAGE_DATA_RATIONAL_TAGS: &[(&str, &str)] = &[
    ("oecf", "oECF"),
    ("shutter_speed_value", "shutterSpeedValue"),
    ("aperture_value", "apertureValue"),
    ("brightness_value", "brightnessValue"),
    ("exposure_bias_value", "exposureBiasValue"),
    ("max_aperture_value", "maxApertureValue"),
    ("flash_energy", "flashEnergy"),
];

/// `ImageData` built from contents bound to [`IMAGE_DATA_CONTENTS`].
pub fn image_data(contents: &Contents) -> Result<Element> {
    contents.expect_template(&IMAGE_DATA_CONTENTS)?;
    let mut container = Element::new("ImageData");

    for (key, tag) in IMAGE_DATA_TEXT_TAGS {
        leaf(&mut container, tag, contents.text(key));
    }
    for (key, tag) in IMAGE_DATA_RATIONAL_TAGS {
        rational_leaf(&mut container, tag, contents.rational(key));
    }
    leaves(
        &mut container,
        "spectralSensitivity",
        contents.text_list("spectral_sensitivity"),
    );

    let distance = contents.text("distance");
    let min_distance = contents.text("min_distance");
    let max_distance = contents.text("max_distance");
    if distance.is_some() || min_distance.is_some() || max_distance.is_some() {
        let mut subject_distance = Element::new("SubjectDistance");
        leaf(&mut subject_distance, "distance", distance);
        if min_distance.is_some() || max_distance.is_some() {
            let mut min_max = Element::new("MinMaxDistance");
            leaf(&mut min_max, "minDistance", min_distance);
            leaf(&mut min_max, "maxDistance", max_distance);
            subject_distance.push(min_max);
        }
        container.push(subject_distance);
    }

    let x_ratio = contents.text("x_print_aspect_ratio");
    let y_ratio = contents.text("y_print_aspect_ratio");
    if x_ratio.is_some() || y_ratio.is_some() {
        let mut print_ratio = Element::new("PrintAspectRatio");
        leaf(&mut print_ratio, "xPrintAspectRatio", x_ratio);
        leaf(&mut print_ratio, "yPrintAspectRatio", y_ratio);
        container.push(print_ratio);
    }

    sort_children("ImageData", IMAGE_DATA_ORDER, &mut container.children)?;
    Ok(container)
}

const GPS_TEXT_TAGS: &[(&str, &str)] = &[
    ("version_id", "gpsVersionID"),
    ("lat_ref", "gpsLatitudeRef"),
    ("long_ref", "gpsLongitudeRef"),
    ("altitude_ref", "gpsAltitudeRef"),
    ("timestamp", "gpsTimeStamp"),
    ("satellites", "gpsSatellites"),
    ("status", "gpsStatus"),
    ("measure_mode", "gpsMeasureMode"),
    ("speed_ref", "gpsSpeedRef"),
    ("track_ref", "gpsTrackRef"),
    ("img_direction_ref", "gpsImgDirectionRef"),
    ("map_datum", "gpsMapDatum"),
    ("dest_lat_ref", "gpsDestLatitudeRef"),
    ("dest_long_ref", "gpsDestLongitudeRef"),
    ("dest_bearing_ref", "gpsDestBearingRef"),
    ("dest_distance_ref", "gpsDestDistanceRef"),
    ("processing_method", "gpsProcessingMethod"),
    ("area_information", "gpsAreaInformation"),
    ("datestamp", "gpsDateStamp"),
    ("differential", "gpsDifferential"),
];

const GPS_RATIONAL_TAGS: &[(&str, &str)] = &[
    ("altitude", "gpsAltitude"),
    ("dop", "gpsDOP"),
    ("speed", "gpsSpeed"),
    ("track", "gpsTrack"),
    ("direction", "gpsImgDirection"),
    ("dest_bearing", "gpsDestBearing"),
    ("dest_distance", "gpsDestDistance"),
];

/// Degree/minute/second groups as (tag, key prefix).
const GPS_GROUPS: &[(&str, &str)] = &[
    ("GPSLatitude", "lat"),
    ("GPSLongitude", "long"),
    ("GPSDestLatitude", "dest_lat"),
    ("GPSDestLongitude", "dest_long"),
];

/// `GPSData` built from contents bound to [`GPS_DATA_CONTENTS`].
pub fn gps_data(contents: &Contents) -> Result<Element> {
    contents.expect_template(&GPS_DATA_CONTENTS)?;
    let mut container = Element::new("GPSData");

    for (key, tag) in GPS_TEXT_TAGS {
        leaf(&mut container, tag, contents.text(key));
    }
    for (key, tag) in GPS_RATIONAL_TAGS {
        rational_leaf(&mut container, tag, contents.rational(key));
    }
    for (tag, prefix) in GPS_GROUPS {
        let degrees = contents.rational(&format!("{prefix}_degrees"));
        let minutes = contents.rational(&format!("{prefix}_minutes"));
        let seconds = contents.rational(&format!("{prefix}_seconds"));
        if degrees.is_some() || minutes.is_some() || seconds.is_some() {
            container.push(gps_group(tag, degrees, minutes, seconds));
        }
    }

    sort_children("GPSData", GPS_DATA_ORDER, &mut container.children)?;
    Ok(container)
}

/// A `gpsGroup` element: `tag{degrees, minutes, seconds}`.
pub fn gps_group(
    tag: &str,
    degrees: Option<Rational>,
    minutes: Option<Rational>,
    seconds: Option<Rational>,
) -> Element {
    let mut container = Element::new(tag);
    rational_leaf(&mut container, "degrees", degrees);
    rational_leaf(&mut container, "minutes", minutes);
    rational_leaf(&mut container, "seconds", seconds);
    container
}

/// Text of the first `dateTimeCreated` at or below `elem`.
pub fn parse_datetime_created(elem: &Element) -> Option<&str> {
    elem.find("dateTimeCreated").and_then(Element::text)
}
