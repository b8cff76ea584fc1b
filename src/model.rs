use crate::error::{MixError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ────────────────────────────────────────────────────────────────────────────
// Element
// ────────────────────────────────────────────────────────────────────────────

/// A MIX element node.
///
/// `name` is the local tag name; every element lives in the MIX namespace and
/// is written with the `mix:` prefix. `attributes` and `namespaces` preserve
/// insertion order so that serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    /// Attributes by qualified name, e.g. `xsi:schemaLocation`.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, String>,
    /// Extra namespace declarations (prefix → URI) emitted on this element.
    /// The `mix` prefix is implied and never stored here.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub namespaces: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// A leaf element holding `text`.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// First direct child with the given tag.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children with the given tag, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Tags of the direct children, in document order.
    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.name.as_str()).collect()
    }

    /// Pre-order traversal starting with `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// First element named `name` in pre-order, `self` included.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.descendants().find(|e| e.name == name)
    }

    /// Read a `rationalType` element (`numerator` and `denominator` leaves)
    /// back into a [`Rational`].
    pub fn as_rational(&self) -> Option<Rational> {
        let numerator = self.child("numerator")?.text()?.trim().parse().ok()?;
        let denominator = self.child("denominator")?.text()?.trim().parse().ok()?;
        Some(Rational::new(numerator, denominator))
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rational
// ────────────────────────────────────────────────────────────────────────────

/// A fraction as the schema's `rationalType` stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rational {
    pub numerator: i64,
    pub denominator: i64,
}

impl Rational {
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Build from a list of one (denominator 1) or two integers.
    pub fn from_parts(element: &str, parts: &[i64]) -> Result<Self> {
        match *parts {
            [numerator] => Ok(Self::new(numerator, 1)),
            [numerator, denominator] => Ok(Self::new(numerator, denominator)),
            _ => Err(MixError::MalformedRational {
                element: element.to_string(),
                len: parts.len(),
            }),
        }
    }

    /// Parse `"n"` or `"n/d"`, reporting failures against `element`.
    pub fn parse(element: &str, s: &str) -> Result<Self> {
        let invalid = || MixError::InvalidType {
            element: element.to_string(),
            expected: "integer or numerator/denominator",
            found: format!("\"{}\"", s),
        };
        let s = s.trim();
        match s.split_once('/') {
            Some((n, d)) => {
                let n = n.trim().parse().map_err(|_| invalid())?;
                let d = d.trim().parse().map_err(|_| invalid())?;
                Ok(Self::new(n, d))
            }
            None => s.parse().map(|n| Self::new(n, 1)).map_err(|_| invalid()),
        }
    }
}

impl From<i64> for Rational {
    fn from(numerator: i64) -> Self {
        Self::new(numerator, 1)
    }
}

impl From<(i64, i64)> for Rational {
    fn from((numerator, denominator): (i64, i64)) -> Self {
        Self::new(numerator, denominator)
    }
}

impl FromStr for Rational {
    type Err = MixError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse("rational", s)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Value
// ────────────────────────────────────────────────────────────────────────────

/// Loosely typed content as it arrives in a contents dictionary. Each key of
/// a [`ContentTemplate`](crate::contents::ContentTemplate) coerces it to the
/// kind it expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Text(String),
    Rational(Rational),
    List(Vec<Value>),
}

impl Value {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Text(_) => "text",
            Value::Rational(_) => "rational",
            Value::List(_) => "list",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Integer(i64::from(n))
    }
}

/// Decimals have no variant of their own and are carried as text.
impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Text(n.to_string())
    }
}

impl From<Rational> for Value {
    fn from(r: Rational) -> Self {
        Value::Rational(r)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}
