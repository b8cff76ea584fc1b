//! NISO MIX 2.0 element builders.
//!
//! This crate builds MIX (Metadata for Images in XML Schema) elements from
//! typed arguments and caller-supplied children. Restricted values are checked
//! against the MIX 2.0 enumerations, and containers sort their children into
//! schema order.
//!
//! ```
//! use nisomix::builder::{mix, object_information::*};
//! use nisomix::generator::WriteOptions;
//!
//! let fixity = fixity(Some("MD5"), Some("abc123"), None)?;
//! let basic = digital_object_information(Some("little-endian"), Some(1024), vec![fixity])?;
//! let root = mix(vec![basic], None)?;
//! let xml = root.to_xml_string(&WriteOptions::pretty())?;
//! assert!(xml.contains("<mix:byteOrder>little endian</mix:byteOrder>"));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod builder;
pub mod contents;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod vocab;

pub use contents::{Contents, GPS_DATA_CONTENTS, IMAGE_DATA_CONTENTS};
pub use error::{MixError, Result};
pub use generator::WriteOptions;
pub use model::{Element, Rational, Value};
