//! # Patterns Serializers
//!
//! Visitors that serialize bank accounts.
//!
//! ## Visitors
//!
//! - [`HtmlVisitor`] - property/value table
//! - [`XmlVisitor`] - fixed-tag markup
//! - [`JsonVisitor`] - tagged JSON object
//!
//! Markup visitors embed field values verbatim unless built with
//! `.escaped()`.
//!
//! ## Example
//!
//! ```rust
//! use patterns_core::sample_bank;
//! use patterns_serializers::{HtmlVisitor, XmlVisitor};
//!
//! let bank = sample_bank();
//! let html = bank.accept(&HtmlVisitor::new());
//! let xml = bank.accept(&XmlVisitor::new());
//! assert_eq!(html.len(), 2);
//! assert!(xml[1].starts_with("<Company>"));
//! ```

pub mod error;
pub mod format;
pub mod visitors;

pub use error::SerializeError;
pub use format::SerializationFormat;
pub use visitors::{FormatVisitor, HtmlVisitor, JsonVisitor, XmlVisitor};
