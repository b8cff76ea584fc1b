//! Structured input for the two composite builders,
//! [`image_data`](crate::builder::capture_metadata::image_data) and
//! [`gps_data`](crate::builder::capture_metadata::gps_data).
//!
//! Each builder has a [`ContentTemplate`] naming the keys it recognizes and
//! the kind of value each key holds. A [`Contents`] is an empty map bound to
//! one template; filling it validates keys and coerces values up front so the
//! builder itself only has to lay out elements.
//!
//! ```
//! use nisomix::contents::IMAGE_DATA_CONTENTS;
//! use nisomix::builder::capture_metadata::image_data;
//!
//! let contents = IMAGE_DATA_CONTENTS
//!     .contents()
//!     .with("fnumber", "5.6")?
//!     .with("shutter_speed_value", [1, 250])?;
//! let elem = image_data(&contents)?;
//! assert_eq!(elem.child_names(), vec!["fNumber", "shutterSpeedValue"]);
//! # Ok::<(), nisomix::error::MixError>(())
//! ```

use crate::error::{MixError, Result};
use crate::model::{Rational, Value};
use anyhow::{Context, anyhow};
use indexmap::IndexMap;

/// What a template key holds once coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A single leaf; text or integers are accepted.
    Text,
    /// A repeating leaf; a scalar is treated as a one-element list.
    TextList,
    /// A `rationalType` element.
    Rational,
}

/// The fixed set of keys a composite builder recognizes.
#[derive(Debug)]
pub struct ContentTemplate {
    pub name: &'static str,
    pub fields: &'static [(&'static str, ValueKind)],
}

impl ContentTemplate {
    pub fn kind_of(&self, key: &str) -> Option<ValueKind> {
        self.field(key).map(|(_, kind)| kind)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(key, _)| *key)
    }

    /// An empty contents map bound to this template.
    pub fn contents(&'static self) -> Contents {
        Contents {
            template: self,
            values: IndexMap::new(),
        }
    }

    fn field(&self, key: &str) -> Option<(&'static str, ValueKind)> {
        self.fields.iter().copied().find(|(k, _)| *k == key)
    }
}

pub static IMAGE_DATA_CONTENTS: ContentTemplate = ContentTemplate {
    name: "image_data",
    fields: &[
        ("fnumber", ValueKind::Text),
        ("exposure_time", ValueKind::Text),
        ("exposure_program", ValueKind::Text),
        ("spectral_sensitivity", ValueKind::TextList),
        ("isospeed_ratings", ValueKind::Text),
        ("oecf", ValueKind::Rational),
        ("exif_version", ValueKind::Text),
        ("shutter_speed_value", ValueKind::Rational),
        ("aperture_value", ValueKind::Rational),
        ("brightness_value", ValueKind::Rational),
        ("exposure_bias_value", ValueKind::Rational),
        ("max_aperture_value", ValueKind::Rational),
        ("distance", ValueKind::Text),
        ("min_distance", ValueKind::Text),
        ("max_distance", ValueKind::Text),
        ("metering_mode", ValueKind::Text),
        ("light_source", ValueKind::Text),
        ("flash", ValueKind::Text),
        ("focal_length", ValueKind::Text),
        ("flash_energy", ValueKind::Rational),
        ("back_light", ValueKind::Text),
        ("exposure_index", ValueKind::Text),
        ("sensing_method", ValueKind::Text),
        ("cfa_pattern", ValueKind::Text),
        ("auto_focus", ValueKind::Text),
        ("x_print_aspect_ratio", ValueKind::Text),
        ("y_print_aspect_ratio", ValueKind::Text),
    ],
};

pub static GPS_DATA_CONTENTS: ContentTemplate = ContentTemplate {
    name: "gps_data",
    fields: &[
        ("version_id", ValueKind::Text),
        ("lat_ref", ValueKind::Text),
        ("lat_degrees", ValueKind::Rational),
        ("lat_minutes", ValueKind::Rational),
        ("lat_seconds", ValueKind::Rational),
        ("long_ref", ValueKind::Text),
        ("long_degrees", ValueKind::Rational),
        ("long_minutes", ValueKind::Rational),
        ("long_seconds", ValueKind::Rational),
        ("altitude_ref", ValueKind::Text),
        ("altitude", ValueKind::Rational),
        ("timestamp", ValueKind::Text),
        ("satellites", ValueKind::Text),
        ("status", ValueKind::Text),
        ("measure_mode", ValueKind::Text),
        ("dop", ValueKind::Rational),
        ("speed_ref", ValueKind::Text),
        ("speed", ValueKind::Rational),
        ("track_ref", ValueKind::Text),
        ("track", ValueKind::Rational),
        ("img_direction_ref", ValueKind::Text),
        ("direction", ValueKind::Rational),
        ("map_datum", ValueKind::Text),
        ("dest_lat_ref", ValueKind::Text),
        ("dest_lat_degrees", ValueKind::Rational),
        ("dest_lat_minutes", ValueKind::Rational),
        ("dest_lat_seconds", ValueKind::Rational),
        ("dest_long_ref", ValueKind::Text),
        ("dest_long_degrees", ValueKind::Rational),
        ("dest_long_minutes", ValueKind::Rational),
        ("dest_long_seconds", ValueKind::Rational),
        ("dest_bearing_ref", ValueKind::Text),
        ("dest_bearing", ValueKind::Rational),
        ("dest_distance_ref", ValueKind::Text),
        ("dest_distance", ValueKind::Rational),
        ("processing_method", ValueKind::Text),
        ("area_information", ValueKind::Text),
        ("datestamp", ValueKind::Text),
        ("differential", ValueKind::Text),
        // Accepted for compatibility; no MIX element is built from it.
        ("gps_groups", ValueKind::Text),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
    Text(String),
    TextList(Vec<String>),
    Rational(Rational),
}

/// Values for one [`ContentTemplate`], in insertion order.
#[derive(Debug, Clone)]
pub struct Contents {
    template: &'static ContentTemplate,
    values: IndexMap<&'static str, Content>,
}

impl Contents {
    pub fn template(&self) -> &'static ContentTemplate {
        self.template
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    /// Store `value` under `key`. Empty text and empty lists clear the key.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<&mut Self> {
        let (key, kind) = self.template.field(key).ok_or_else(|| {
            log::debug!("rejecting key {:?} for {}", key, self.template.name);
            MixError::UnknownKey {
                key: key.to_string(),
                template: self.template.name,
            }
        })?;
        match coerce(key, kind, value.into())? {
            Some(content) => {
                self.values.insert(key, content);
            }
            None => {
                self.values.shift_remove(key);
            }
        }
        Ok(self)
    }

    /// By-value form of [`Contents::set`] for chaining.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Result<Self> {
        self.set(key, value)?;
        Ok(self)
    }

    /// Fill contents from a JSON object. `null` values are skipped, but their
    /// keys must still belong to the template.
    pub fn from_json(
        template: &'static ContentTemplate,
        json: &serde_json::Value,
    ) -> anyhow::Result<Self> {
        let object = json
            .as_object()
            .ok_or_else(|| anyhow!("{} contents must be a JSON object", template.name))?;
        let mut contents = template.contents();
        for (key, raw) in object {
            if raw.is_null() {
                if template.kind_of(key).is_none() {
                    return Err(MixError::UnknownKey {
                        key: key.clone(),
                        template: template.name,
                    }
                    .into());
                }
                continue;
            }
            let value: Value = serde_json::from_value(floats_as_text(raw))
                .with_context(|| format!("Invalid value for key {:?}", key))?;
            contents.set(key, value)?;
        }
        Ok(contents)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.values.get(key)? {
            Content::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn text_list(&self, key: &str) -> &[String] {
        match self.values.get(key) {
            Some(Content::TextList(items)) => items,
            _ => &[],
        }
    }

    pub fn rational(&self, key: &str) -> Option<Rational> {
        match self.values.get(key)? {
            Content::Rational(r) => Some(*r),
            _ => None,
        }
    }

    pub(crate) fn expect_template(&self, expected: &'static ContentTemplate) -> Result<()> {
        if std::ptr::eq(self.template, expected) {
            Ok(())
        } else {
            Err(MixError::TemplateMismatch {
                expected: expected.name,
                found: self.template.name,
            })
        }
    }
}

/// Non-integer JSON numbers are carried as their decimal text, e.g. `5.6`.
fn floats_as_text(raw: &serde_json::Value) -> serde_json::Value {
    match raw {
        serde_json::Value::Number(n) if !n.is_i64() => serde_json::Value::String(n.to_string()),
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(floats_as_text).collect())
        }
        other => other.clone(),
    }
}

fn coerce(key: &str, kind: ValueKind, value: Value) -> Result<Option<Content>> {
    let content = match kind {
        ValueKind::Text => scalar_text(key, value)?.map(Content::Text),
        ValueKind::TextList => {
            let items = match value {
                Value::List(items) => items
                    .into_iter()
                    .map(|item| scalar_text(key, item))
                    .filter_map(|item| item.transpose())
                    .collect::<Result<Vec<_>>>()?,
                other => scalar_text(key, other)?.into_iter().collect(),
            };
            (!items.is_empty()).then_some(Content::TextList(items))
        }
        ValueKind::Rational => match value {
            Value::Integer(n) => Some(Content::Rational(Rational::from(n))),
            Value::Rational(r) => Some(Content::Rational(r)),
            Value::Text(s) if s.is_empty() => None,
            Value::Text(s) => Some(Content::Rational(Rational::parse(key, &s)?)),
            Value::List(items) if items.is_empty() => None,
            Value::List(items) => {
                let parts = items
                    .iter()
                    .map(|item| integer_part(key, item))
                    .collect::<Result<Vec<_>>>()?;
                Some(Content::Rational(Rational::from_parts(key, &parts)?))
            }
        },
    };
    Ok(content)
}

fn scalar_text(key: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Text(s) => Ok((!s.is_empty()).then_some(s)),
        Value::Integer(n) => Ok(Some(n.to_string())),
        other => Err(MixError::InvalidType {
            element: key.to_string(),
            expected: "text or integer",
            found: other.kind_name().to_string(),
        }),
    }
}

fn integer_part(key: &str, value: &Value) -> Result<i64> {
    let invalid = |found: String| MixError::InvalidType {
        element: key.to_string(),
        expected: "integer",
        found,
    };
    match value {
        Value::Integer(n) => Ok(*n),
        Value::Text(s) => s.trim().parse().map_err(|_| invalid(format!("\"{}\"", s))),
        other => Err(invalid(other.kind_name().to_string())),
    }
}
