//! Fixed MIX 2.0 vocabulary: namespaces, enumerated value sets and the
//! child sequences of the containers whose content is sorted on build.
//!
//! Values follow the Data Dictionary - Technical Metadata for Digital Still
//! Images (ANSI/NISO Z39.87-2006 (R2017)).

use indexmap::IndexMap;

pub const MIX_NS: &str = "http://www.loc.gov/mix/v20";
pub const MIX_PREFIX: &str = "mix";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const MIX_SCHEMA_LOCATION: &str = "http://www.loc.gov/mix/v20 http://www.loc.gov/mix/mix.xsd";

/// Namespace declarations placed on the `mix` root when the caller does not
/// give any. The `mix` prefix itself is always implied.
pub fn default_namespaces() -> IndexMap<String, String> {
    let mut ns = IndexMap::new();
    ns.insert("xsi".to_string(), XSI_NS.to_string());
    ns
}

// ────────────────────────────────────────────────────────────────────────────
// Enumerated value sets
// ────────────────────────────────────────────────────────────────────────────

pub const BYTE_ORDER_TYPES: &[&str] = &["big endian", "little endian"];

pub const DIGEST_ALGORITHMS: &[&str] = &[
    "Adler-32", "CRC32", "HAVAL", "MD5", "MNP", "SHA-1", "SHA-256", "SHA-384", "SHA-512", "TIGER",
    "WHIRLPOOL", "unknown",
];

pub const YCBCR_SUBSAMPLE_TYPES: &[&str] = &["1", "2", "4"];

pub const YCBCR_POSITIONING_TYPES: &[&str] = &["1", "2"];

pub const COMPONENT_INTERPRETATION_TYPES: &[&str] = &["R", "G", "B", "Y", "Cb", "Cr"];

pub const ORIENTATION_TYPES: &[&str] = &[
    "normal*",
    "normal, image flipped",
    "normal, rotated 180°",
    "normal, image flipped, rotated 180°",
    "normal, image flipped, rotated cw 90°",
    "normal, rotated ccw 90°",
    "normal, image flipped, rotated ccw 90°",
    "normal, rotated cw 90°",
    "unknown",
];

pub const DJVU_FORMATS: &[&str] = &["indirect", "bundled"];

pub const DIMENSION_UNITS: &[&str] = &["in.", "mm"];

pub const OPTICAL_RESOLUTION_UNITS: &[&str] = &["no absolute unit", "in.", "cm"];

pub const CAPTURE_DEVICE_TYPES: &[&str] = &[
    "transmission scanner",
    "reflection print scanner",
    "digital still camera",
    "still from video",
];

pub const DEVICE_TYPES: &[&str] = &["scanner", "camera"];

pub const SCANNER_SENSOR_TYPES: &[&str] = &[
    "undefined",
    "MonochromeLinear",
    "ColorTriLinear",
    "ColorSequentialLinear",
    "MonochromeArea",
    "OneChipColourArea",
    "TwoChipColorArea",
    "ThreeChipColorArea",
    "ColorSequentialArea",
];

pub const CAMERA_SENSOR_TYPES: &[&str] = &[
    "undefined",
    "MonochromeArea",
    "OneChipColorArea",
    "TwoChipColorArea",
    "ThreeChipColorArea",
    "MonochromeLinear",
    "ColorTriLinear",
    "ColorSequentialLinear",
];

/// Exif exposure programs. Published for callers; `image_data` writes
/// `exposureProgram` as given.
pub const EXPOSURE_PROGRAM_TYPES: &[&str] = &[
    "Not defined",
    "Manual",
    "Normal program",
    "Aperture priority",
    "Shutter priority",
    "Creative program (biased toward depth of field)",
    "Action program (biased toward fast shutter speed)",
    "Portrait mode (for closeup photos with the background out of focus)",
    "Landscape mode (for landscape photos with the background in focus)",
];

pub const EXIF_VERSION_TYPES: &[&str] = &["0220", "0221"];

pub const METERING_MODE_TYPES: &[&str] = &[
    "Average",
    "Center weighted average",
    "Spot",
    "Multispot",
    "Pattern",
    "Partial",
];

pub const SAMPLING_FREQUENCY_PLANES: &[&str] = &[
    "camera/scanner focal plane",
    "object plane",
    "source object plane",
];

pub const SAMPLING_FREQUENCY_UNITS: &[&str] = &["no absolute unit of measurement", "in.", "cm"];

pub const BITS_PER_SAMPLE_UNITS: &[&str] = &["integer", "floating point"];

pub const EXTRA_SAMPLES_TYPES: &[&str] = &[
    "unspecified data",
    "associated alpha data (with pre-multiplied color)",
    "unassociated alpha data",
    "range or depth data",
];

pub const GRAY_RESPONSE_UNITS: &[&str] = &[
    "Number represents tenths of a unit",
    "Number represents hundredths of a unit",
    "Number represents thousandths of a unit",
    "Number represents ten-thousandths of a unit",
    "Number represents hundred-thousandths of a unit",
];

pub const TARGET_TYPES: &[&str] = &["external", "internal"];

// ────────────────────────────────────────────────────────────────────────────
// Child sequences
// ────────────────────────────────────────────────────────────────────────────

pub const MIX_ROOT_ORDER: &[&str] = &[
    "BasicDigitalObjectInformation",
    "BasicImageInformation",
    "ImageCaptureMetadata",
    "ImageAssessmentMetadata",
    "ChangeHistory",
    "Extension",
];

pub const BASIC_DO_ORDER: &[&str] = &[
    "ObjectIdentifier",
    "fileSize",
    "FormatDesignation",
    "FormatRegistry",
    "byteOrder",
    "Compression",
    "Fixity",
];

pub const IMAGE_INFORMATION_ORDER: &[&str] =
    &["BasicImageCharacteristics", "SpecialFormatCharacteristics"];

pub const PHOTOMETRIC_INTERPRETATION_ORDER: &[&str] =
    &["colorSpace", "ColorProfile", "YCbCr", "ReferenceBlackWhite"];

pub const IMAGE_CAPTURE_ORDER: &[&str] = &[
    "SourceInformation",
    "GeneralCaptureInformation",
    "ScannerCapture",
    "DigitalCameraCapture",
    "orientation",
    "methodology",
];

pub const SOURCE_INFORMATION_ORDER: &[&str] = &["sourceType", "SourceID", "SourceSize"];

pub const SCANNER_CAPTURE_ORDER: &[&str] = &[
    "scannerManufacturer",
    "ScannerModel",
    "MaximumOpticalResolution",
    "scannerSensor",
    "ScanningSystemSoftware",
];

pub const CAMERA_CAPTURE_ORDER: &[&str] = &[
    "digitalCameraManufacturer",
    "DigitalCameraModel",
    "cameraSensor",
    "CameraCaptureSettings",
];

pub const CAMERA_CAPTURE_SETTINGS_ORDER: &[&str] = &["ImageData", "GPSData"];

pub const IMAGE_DATA_ORDER: &[&str] = &[
    "fNumber",
    "exposureTime",
    "exposureProgram",
    "spectralSensitivity",
    "isoSpeedRatings",
    "oECF",
    "exifVersion",
    "shutterSpeedValue",
    "apertureValue",
    "brightnessValue",
    "exposureBiasValue",
    "maxApertureValue",
    "SubjectDistance",
    "meteringMode",
    "lightSource",
    "flash",
    "focalLength",
    "flashEnergy",
    "backLight",
    "exposureIndex",
    "sensingMethod",
    "cfaPattern",
    "autoFocus",
    "PrintAspectRatio",
];

pub const GPS_DATA_ORDER: &[&str] = &[
    "gpsVersionID",
    "gpsLatitudeRef",
    "GPSLatitude",
    "gpsLongitudeRef",
    "GPSLongitude",
    "gpsAltitudeRef",
    "gpsAltitude",
    "gpsTimeStamp",
    "gpsSatellites",
    "gpsStatus",
    "gpsMeasureMode",
    "gpsDOP",
    "gpsSpeedRef",
    "gpsSpeed",
    "gpsTrackRef",
    "gpsTrack",
    "gpsImgDirectionRef",
    "gpsImgDirection",
    "gpsMapDatum",
    "gpsDestLatitudeRef",
    "GPSDestLatitude",
    "gpsDestLongitudeRef",
    "GPSDestLongitude",
    "gpsDestBearingRef",
    "gpsDestBearing",
    "gpsDestDistanceRef",
    "gpsDestDistance",
    "gpsProcessingMethod",
    "gpsAreaInformation",
    "gpsDateStamp",
    "gpsDifferential",
];

pub const ASSESSMENT_METADATA_ORDER: &[&str] =
    &["SpatialMetrics", "ImageColorEncoding", "TargetData"];

pub const COLOR_ENCODING_ORDER: &[&str] = &[
    "BitsPerSample",
    "samplesPerPixel",
    "extraSamples",
    "Colormap",
    "GrayResponse",
    "WhitePoint",
    "PrimaryChromaticities",
];

pub const TARGET_DATA_ORDER: &[&str] =
    &["targetType", "TargetID", "externalTarget", "performanceData"];

pub const CHANGE_HISTORY_ORDER: &[&str] = &["ImageProcessing", "PreviousImageMetadata"];

pub const IMAGE_PROCESSING_ORDER: &[&str] = &[
    "dateTimeProcessed",
    "sourceData",
    "processingAgency",
    "processingRationale",
    "ProcessingSoftware",
    "processingActions",
];
