//! Serialize [`Element`] trees as MIX XML.
//!
//! Every element is written with the `mix:` prefix. The serialized root
//! declares `xmlns:mix` followed by its own namespace declarations; nested
//! elements only declare the namespaces stored on them.
//!
//! Text and attribute values must consist of XML 1.0 characters. Carriage
//! returns in text, and tabs and line breaks in attribute values, are written
//! as character references so that a parser reads back the same string.

use crate::error::MixError;
use crate::model::Element;
use crate::vocab::{MIX_NS, MIX_PREFIX};
use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use std::borrow::Cow;
use std::io::Write;

/// Output layout for [`Element::to_xml_string`] and [`Element::write_to`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Spaces per nesting level; `None` writes everything on one line.
    pub indent: Option<usize>,
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` first.
    pub declaration: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: None,
            declaration: true,
        }
    }
}

impl WriteOptions {
    /// Two-space indentation with declaration.
    pub fn pretty() -> Self {
        Self {
            indent: Some(2),
            declaration: true,
        }
    }
}

impl Element {
    /// Serialize this element and its subtree to a string.
    ///
    /// ```
    /// use nisomix::builder::image_information::mrsid;
    /// use nisomix::generator::WriteOptions;
    ///
    /// let opts = WriteOptions { indent: None, declaration: false };
    /// let xml = mrsid(Some(3)).to_xml_string(&opts)?;
    /// assert_eq!(
    ///     xml,
    ///     r#"<mix:MrSID xmlns:mix="http://www.loc.gov/mix/v20"><mix:zoomLevels>3</mix:zoomLevels></mix:MrSID>"#
    /// );
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn to_xml_string(&self, options: &WriteOptions) -> Result<String> {
        let mut out = Vec::with_capacity(4096);
        self.write_to(&mut out, options)?;
        String::from_utf8(out).context("Serialized XML is not valid UTF-8")
    }

    /// Serialize this element and its subtree into `writer`.
    pub fn write_to<W: Write>(&self, writer: W, options: &WriteOptions) -> Result<()> {
        let mut xml = match options.indent {
            Some(size) => Writer::new_with_indent(writer, b' ', size),
            None => Writer::new(writer),
        };
        if options.declaration {
            xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
                .context("Failed to write XML declaration")?;
        }
        write_element(&mut xml, self, true)
            .with_context(|| format!("Failed to write <{}:{}>", MIX_PREFIX, self.name))
    }
}

fn qualified(name: &str) -> String {
    format!("{}:{}", MIX_PREFIX, name)
}

/// Fail on the first character XML 1.0 cannot represent.
fn check_chars(element: &str, value: &str) -> Result<(), MixError> {
    let illegal = value.chars().find(|&c| {
        matches!(
            c,
            '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}'
        )
    });
    match illegal {
        Some(c) => Err(MixError::InvalidType {
            element: element.to_string(),
            expected: "XML 1.0 characters",
            found: format!("U+{:04X}", u32::from(c)),
        }),
        None => Ok(()),
    }
}

fn escape_text(text: &str) -> String {
    escape(text).replace('\r', "&#13;")
}

fn escape_attribute(value: &str) -> String {
    escape(value)
        .replace('\r', "&#13;")
        .replace('\n', "&#10;")
        .replace('\t', "&#9;")
}

fn push_attribute(start: &mut BytesStart<'_>, element: &str, name: &str, value: &str) -> Result<()> {
    check_chars(element, value)?;
    start.push_attribute(Attribute {
        key: QName(name.as_bytes()),
        value: Cow::Owned(escape_attribute(value).into_bytes()),
    });
    Ok(())
}

fn write_element<W: Write>(xml: &mut Writer<W>, elem: &Element, is_root: bool) -> Result<()> {
    let tag = qualified(&elem.name);
    log::trace!("writing <{}>", tag);

    let mut start = BytesStart::new(tag.as_str());
    if is_root {
        push_attribute(&mut start, &elem.name, &format!("xmlns:{}", MIX_PREFIX), MIX_NS)?;
    }
    for (prefix, uri) in &elem.namespaces {
        push_attribute(&mut start, &elem.name, &format!("xmlns:{}", prefix), uri)?;
    }
    for (name, value) in &elem.attributes {
        push_attribute(&mut start, &elem.name, name, value)?;
    }

    if elem.children.is_empty() && elem.text.is_none() {
        xml.write_event(Event::Empty(start))?;
        return Ok(());
    }

    xml.write_event(Event::Start(start))?;
    if let Some(text) = &elem.text {
        check_chars(&elem.name, text)?;
        xml.write_event(Event::Text(BytesText::from_escaped(escape_text(text))))?;
    }
    for child in &elem.children {
        write_element(xml, child, false)?;
    }
    xml.write_event(Event::End(BytesEnd::new(tag.as_str())))?;
    Ok(())
}
