//! Basic Digital Object Information (MIX chapter 6).

use super::{append_sorted, leaf, leaf_num, rational_leaf, restricted_leaf};
use crate::error::{MixError, Result};
use crate::model::{Element, Rational};
use crate::vocab::{BASIC_DO_ORDER, BYTE_ORDER_TYPES, DIGEST_ALGORITHMS};

/// Compression scheme value that requires the local list and value leaves.
pub const LOCAL_LIST_SCHEME: &str = "enumerated in local list";

/// `BasicDigitalObjectInformation`. The byte order is normalized with
/// [`normalized_byteorder`]; all children are sorted into schema order:
///
/// ```text
/// ObjectIdentifier, fileSize, FormatDesignation, FormatRegistry,
/// byteOrder, Compression, Fixity
/// ```
pub fn digital_object_information(
    byte_order: Option<&str>,
    file_size: Option<u64>,
    children: Vec<Element>,
) -> Result<Element> {
    let mut container = Element::new("BasicDigitalObjectInformation");
    leaf_num(&mut container, "fileSize", file_size);
    if let Some(byte_order) = byte_order.filter(|b| !b.is_empty()) {
        container.push(Element::with_text(
            "byteOrder",
            normalized_byteorder(byte_order)?,
        ));
    }
    append_sorted(
        &mut container,
        "BasicDigitalObjectInformation",
        BASIC_DO_ORDER,
        children,
    )?;
    Ok(container)
}

/// `ObjectIdentifier{objectIdentifierType, objectIdentifierValue}`.
pub fn identifier(id_type: Option<&str>, id_value: Option<&str>) -> Element {
    let mut container = Element::new("ObjectIdentifier");
    leaf(&mut container, "objectIdentifierType", id_type);
    leaf(&mut container, "objectIdentifierValue", id_value);
    container
}

/// `FormatDesignation{formatName, formatVersion}`.
pub fn format_designation(format_name: Option<&str>, format_version: Option<&str>) -> Element {
    let mut container = Element::new("FormatDesignation");
    leaf(&mut container, "formatName", format_name);
    leaf(&mut container, "formatVersion", format_version);
    container
}

/// `FormatRegistry{formatRegistryName, formatRegistryKey}`.
pub fn format_registry(registry_name: Option<&str>, registry_key: Option<&str>) -> Element {
    let mut container = Element::new("FormatRegistry");
    leaf(&mut container, "formatRegistryName", registry_name);
    leaf(&mut container, "formatRegistryKey", registry_key);
    container
}

/// `Compression`. The local list and value are only written when the scheme
/// is [`LOCAL_LIST_SCHEME`].
pub fn compression(
    compression_scheme: Option<&str>,
    local_list: Option<&str>,
    local_value: Option<&str>,
    compression_ratio: Option<Rational>,
) -> Element {
    let mut container = Element::new("Compression");
    leaf(&mut container, "compressionScheme", compression_scheme);
    if compression_scheme == Some(LOCAL_LIST_SCHEME) {
        leaf(&mut container, "compressionSchemeLocalList", local_list);
        leaf(&mut container, "compressionSchemeLocalValue", local_value);
    }
    rational_leaf(&mut container, "compressionRatio", compression_ratio);
    container
}

/// `Fixity`. The algorithm must be one of [`DIGEST_ALGORITHMS`].
pub fn fixity(
    algorithm: Option<&str>,
    digest: Option<&str>,
    originator: Option<&str>,
) -> Result<Element> {
    let mut container = Element::new("Fixity");
    restricted_leaf(
        &mut container,
        "messageDigestAlgorithm",
        algorithm,
        DIGEST_ALGORITHMS,
    )?;
    leaf(&mut container, "messageDigest", digest);
    leaf(&mut container, "messageDigestOriginator", originator);
    Ok(container)
}

/// Map free-form byte order spellings onto the schema values.
///
/// Hyphens and underscores become spaces and case is ignored, so
/// `"Big-endian (Motorola)"` yields `"big endian"`.
pub fn normalized_byteorder(byte_order: &str) -> Result<&'static str> {
    let normalized = byte_order.replace(['-', '_'], " ").to_lowercase();

    if let Some(exact) = BYTE_ORDER_TYPES.iter().find(|t| **t == normalized) {
        return Ok(*exact);
    }
    let guess = if normalized.contains("big") && normalized.contains("endian") {
        Some("big endian")
    } else if normalized.contains("little") && normalized.contains("endian") {
        Some("little endian")
    } else {
        None
    };
    match guess {
        Some(value) => {
            log::debug!("normalized byte order {:?} to {:?}", byte_order, value);
            Ok(value)
        }
        None => Err(MixError::InvalidValue {
            element: "byteOrder",
            value: normalized,
            accepted: BYTE_ORDER_TYPES,
        }),
    }
}

/// Read `(messageDigestAlgorithm, messageDigest)` from `elem` if it is a
/// `Fixity` element, or from the first `Fixity` below it.
pub fn parse_message_digest(elem: &Element) -> (Option<&str>, Option<&str>) {
    let Some(fixity) = elem.find("Fixity") else {
        return (None, None);
    };
    let text_of = |name: &str| fixity.child(name).and_then(Element::text);
    (text_of("messageDigestAlgorithm"), text_of("messageDigest"))
}
