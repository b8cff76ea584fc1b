//! Read MIX XML back into [`Element`] trees.
//!
//! The reader is the inverse of [`generator`](crate::generator): tags must be
//! in the MIX namespace, attributes keep their qualified names and each
//! element records the namespace declarations it introduces (other than
//! `mix` itself). Whitespace between child elements is dropped.

use crate::model::Element;
use crate::vocab::{MIX_NS, MIX_PREFIX};
use anyhow::{Context, Result, anyhow, bail};
use camino::Utf8Path;
use roxmltree::{Document, Node};

impl Element {
    /// Parse a MIX document or fragment.
    ///
    /// ```
    /// use nisomix::model::Element;
    ///
    /// let elem = Element::from_xml_str(
    ///     r#"<mix:SourceID xmlns:mix="http://www.loc.gov/mix/v20">
    ///          <mix:sourceIDType>local</mix:sourceIDType>
    ///        </mix:SourceID>"#,
    /// )?;
    /// assert_eq!(elem.name, "SourceID");
    /// assert_eq!(elem.child("sourceIDType").and_then(|e| e.text()), Some("local"));
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn from_xml_str(text: &str) -> Result<Element> {
        parse_mix_text(text, None)
    }

    /// Read and parse a MIX file.
    pub fn from_xml_file(path: impl AsRef<Utf8Path>) -> Result<Element> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
        parse_mix_text(&text, Some(path.as_str()))
    }
}

/// Parse MIX XML text. `path_hint` only appears in error messages.
pub fn parse_mix_text(text: &str, path_hint: Option<&str>) -> Result<Element> {
    let hint = path_hint.unwrap_or("<mix>");
    let doc = Document::parse(text).with_context(|| format!("Failed to parse XML {}", hint))?;
    let root = doc.root_element();
    convert(root, None).with_context(|| format!("Invalid MIX content in {}", hint))
}

fn convert(node: Node<'_, '_>, parent: Option<Node<'_, '_>>) -> Result<Element> {
    let tag = node.tag_name();
    if tag.namespace() != Some(MIX_NS) {
        bail!(
            "<{}> is not in the MIX namespace {}",
            tag.name(),
            MIX_NS
        );
    }
    let mut elem = Element::new(tag.name());

    for ns in node.namespaces() {
        let Some(prefix) = ns.name() else { continue };
        if prefix == MIX_PREFIX || prefix == "xml" {
            continue;
        }
        let inherited = parent.is_some_and(|p| {
            p.namespaces()
                .any(|outer| outer.name() == Some(prefix) && outer.uri() == ns.uri())
        });
        if !inherited {
            elem.namespaces
                .insert(prefix.to_string(), ns.uri().to_string());
        }
    }

    for attr in node.attributes() {
        let name = match attr.namespace() {
            Some(uri) => {
                let prefix = node
                    .lookup_prefix(uri)
                    .ok_or_else(|| anyhow!("No prefix bound to {} on <{}>", uri, tag.name()))?;
                format!("{}:{}", prefix, attr.name())
            }
            None => attr.name().to_string(),
        };
        elem.attributes.insert(name, attr.value().to_string());
    }

    let mut has_element_children = false;
    for child in node.children().filter(Node::is_element) {
        has_element_children = true;
        elem.push(convert(child, Some(node))?);
    }
    if !has_element_children {
        let mut texts = node.children().filter(Node::is_text).filter_map(|c| c.text());
        elem.text = texts.next().map(|first| texts.fold(first.to_string(), |acc, t| acc + t));
    }

    Ok(elem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_foreign_root() {
        let err = Element::from_xml_str("<foo/>").unwrap_err();
        assert!(format!("{:#}", err).contains("not in the MIX namespace"));
    }

    #[test]
    fn test_attribute_prefix_recovered() {
        let elem = Element::from_xml_str(
            r#"<mix:mix xmlns:mix="http://www.loc.gov/mix/v20"
                        xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
                        xsi:schemaLocation="a b"/>"#,
        )
        .unwrap();
        assert_eq!(elem.attribute("xsi:schemaLocation"), Some("a b"));
        assert_eq!(
            elem.namespaces.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["xsi"]
        );
        assert!(elem.text.is_none());
    }

    #[test]
    fn test_whitespace_between_children_dropped() {
        let elem = Element::from_xml_str(
            "<mix:Colormap xmlns:mix=\"http://www.loc.gov/mix/v20\">\n  \
             <mix:colormapReference>x</mix:colormapReference>\n</mix:Colormap>",
        )
        .unwrap();
        assert!(elem.text.is_none());
        assert_eq!(elem.children.len(), 1);
    }
}
