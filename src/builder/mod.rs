//! MIX element builders, one sub-module per chapter of the data dictionary:
//!
//! - [`object_information`] – Basic Digital Object Information (chapter 6)
//! - [`image_information`] – Basic Image Information (chapter 7)
//! - [`capture_metadata`] – Image Capture Metadata (chapter 8)
//! - [`assessment_metadata`] – Image Assessment Metadata (chapter 9)
//! - [`change_history`] – Change History (chapter 10)
//!
//! Every builder returns a fresh [`Element`]. Optional content that is `None`
//! or an empty string produces no leaf. Containers that mix generated leaves
//! with caller-supplied children sort them into schema order; siblings with
//! the same tag keep the order they were given in.

pub mod assessment_metadata;
pub mod capture_metadata;
pub mod change_history;
pub mod image_information;
pub mod object_information;

use crate::error::{MixError, Result};
use crate::model::{Element, Rational};
use crate::vocab::{MIX_ROOT_ORDER, MIX_SCHEMA_LOCATION, XSI_NS, default_namespaces};
use indexmap::IndexMap;
use std::fmt::Display;

/// Build the `mix` root element.
///
/// `namespaces` are declared on the root; `None` uses
/// [`default_namespaces`]. The `xsi` prefix is always declared since the root
/// carries `xsi:schemaLocation`. Children are sorted into the schema sequence
/// BasicDigitalObjectInformation, BasicImageInformation, ImageCaptureMetadata,
/// ImageAssessmentMetadata, ChangeHistory, Extension.
pub fn mix(
    children: Vec<Element>,
    namespaces: Option<IndexMap<String, String>>,
) -> Result<Element> {
    let mut root = Element::new("mix");
    root.namespaces = namespaces.unwrap_or_else(default_namespaces);
    root.namespaces.shift_remove("mix");
    if !root.namespaces.contains_key("xsi") {
        root.namespaces.insert("xsi".to_string(), XSI_NS.to_string());
    }
    root.set_attribute("xsi:schemaLocation", MIX_SCHEMA_LOCATION);
    append_sorted(&mut root, "mix", MIX_ROOT_ORDER, children)?;
    Ok(root)
}

// ────────────────────────────────────────────────────────────────────────────
// Shared helpers
// ────────────────────────────────────────────────────────────────────────────

pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Append `<name>text</name>` when `text` is present.
pub(crate) fn leaf(parent: &mut Element, name: &str, text: Option<&str>) {
    if let Some(text) = present(text) {
        parent.push(Element::with_text(name, text));
    }
}

/// Append a leaf holding the decimal rendering of `value`.
pub(crate) fn leaf_num<T: Display>(parent: &mut Element, name: &str, value: Option<T>) {
    if let Some(value) = value {
        parent.push(Element::with_text(name, value.to_string()));
    }
}

/// Append one leaf per item; empty items are skipped.
pub(crate) fn leaves<S: AsRef<str>>(parent: &mut Element, name: &str, items: &[S]) {
    for item in items {
        leaf(parent, name, Some(item.as_ref()));
    }
}

pub(crate) fn rational_element(name: &str, value: Rational) -> Element {
    let mut elem = Element::new(name);
    elem.push(Element::with_text("numerator", value.numerator.to_string()));
    elem.push(Element::with_text("denominator", value.denominator.to_string()));
    elem
}

pub(crate) fn rational_leaf(parent: &mut Element, name: &str, value: Option<Rational>) {
    if let Some(value) = value {
        parent.push(rational_element(name, value));
    }
}

/// Check a restricted value against its enumerated set.
pub(crate) fn restricted<'v>(
    element: &'static str,
    value: &'v str,
    accepted: &'static [&'static str],
) -> Result<&'v str> {
    if accepted.contains(&value) {
        Ok(value)
    } else {
        log::debug!("rejecting {:?} for {}", value, element);
        Err(MixError::InvalidValue {
            element,
            value: value.to_string(),
            accepted,
        })
    }
}

/// Append a restricted leaf when `value` is present, failing if it is not in
/// `accepted`.
pub(crate) fn restricted_leaf(
    parent: &mut Element,
    name: &'static str,
    value: Option<&str>,
    accepted: &'static [&'static str],
) -> Result<()> {
    if let Some(value) = present(value) {
        restricted(name, value, accepted)?;
        parent.push(Element::with_text(name, value));
    }
    Ok(())
}

/// Stable-sort `children` into the sequence given by `order`.
pub(crate) fn sort_children(
    parent: &'static str,
    order: &[&str],
    children: &mut [Element],
) -> Result<()> {
    if let Some(stray) = children.iter().find(|c| !order.contains(&c.name.as_str())) {
        return Err(MixError::UnexpectedChild {
            parent,
            child: stray.name.clone(),
        });
    }
    children.sort_by_key(|c| {
        order
            .iter()
            .position(|name| *name == c.name)
            .unwrap_or(usize::MAX)
    });
    Ok(())
}

/// Merge `extra` into the children already on `container`, then sort the
/// whole sequence.
pub(crate) fn append_sorted(
    container: &mut Element,
    parent: &'static str,
    order: &[&str],
    extra: Vec<Element>,
) -> Result<()> {
    container.children.extend(extra);
    sort_children(parent, order, &mut container.children)
}

/// A container whose children are appended as given.
pub(crate) fn plain_container(name: &str, children: Vec<Element>) -> Element {
    let mut elem = Element::new(name);
    elem.children = children;
    elem
}
