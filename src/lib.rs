//! Shedoc - Word document assembly for SHE management reports
//!
//! This library turns structured report content (a title, client metadata,
//! ordered sections of paragraphs, an optional logo) into a complete
//! Word (.docx) package: WordprocessingML parts rendered as XML and
//! stored in an uncompressed ZIP container built by the in-repo
//! [`marula_zip`] crate.
//!
//! # Features
//!
//! - **Package generation**: every required OOXML part — content types,
//!   relationships, core/app properties, document body, styles
//! - **Logo embedding**: PNG/JPEG logos decoded from data URIs and wired
//!   in as inline drawings
//! - **Markdown sectioning**: `##` headings and `-`/`*` bullets from an
//!   upstream text generator become sections and paragraphs
//! - **Deterministic output**: one timestamp per call; identical inputs
//!   and timestamp produce byte-identical packages
//!
//! # Example - Generating a document
//!
//! ```rust
//! use shedoc::{DocumentOptions, convert_markdown_to_sections, generate_document};
//!
//! # fn main() -> shedoc::Result<()> {
//! let options = DocumentOptions {
//!     title: "Baseline Risk Assessment".to_string(),
//!     company_name: "Acme Mining".to_string(),
//!     generated_by: "J. Mokoena".to_string(),
//!     client_name: Some("Westfield Contractors".to_string()),
//!     iso_standard: Some("ISO 45001".to_string()),
//!     sections: convert_markdown_to_sections("## Scope\n- Site clearing"),
//!     logo: None,
//! };
//!
//! let document = generate_document(&options)?;
//! assert!(!document.buffer.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Decoding a logo
//!
//! ```rust
//! use shedoc::decode_data_uri;
//!
//! // Unsupported types degrade to "no logo" rather than failing.
//! assert!(decode_data_uri("data:image/gif;base64,R0lGODlh").is_none());
//! ```

/// Word (.docx) package generation
///
/// This module provides the content model and the generator that turns it
/// into a complete OOXML package.
pub mod docx;

/// Error types for document assembly
pub mod error;

/// Markdown-like text to section conversion
pub mod markdown;

/// Logo data-URI decoding
pub mod media;

/// Open Packaging Conventions constants
pub mod opc;

// Re-export commonly used types for convenience
pub use docx::model::{DocumentOptions, ImageFormat, LogoInfo, Paragraph, Section};
pub use docx::package::{GeneratedDocument, generate_document, generate_document_at};
pub use error::{DocError, Result};
pub use markdown::convert_markdown_to_sections;
pub use media::decode_data_uri;
