//! Word (.docx) package generation.
//!
//! This module turns a [`model::DocumentOptions`] value into a complete
//! WordprocessingML package: the part generators under [`writer`] render
//! each XML part, and [`package`] stores them in a ZIP container in a
//! fixed order.

pub mod model;
pub mod package;
pub(crate) mod writer;

pub use model::{DocumentOptions, ImageFormat, LogoInfo, Paragraph, Section};
pub use package::{GeneratedDocument, generate_document, generate_document_at};
