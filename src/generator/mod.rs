//! MIX XML generation.
//!
//! - [`xml`] – [`Element`](crate::model::Element) serialization and [`WriteOptions`]

pub mod xml;

pub use xml::WriteOptions;
