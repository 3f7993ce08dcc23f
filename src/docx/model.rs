//! Content model consumed by the document generator.
//!
//! Everything here is plain owned data: the surrounding application
//! gathers titles, sections and an optional logo, hands over one
//! [`DocumentOptions`] value, and receives bytes back. Nothing in the
//! model touches the network, the database, or any global state.

use crate::opc::constants::content_type as ct;

/// A unit of renderable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Literal paragraph content; empty strings render as empty runs.
    pub text: String,
    /// Whether the whole paragraph renders in bold.
    pub bold: bool,
    /// Whether the paragraph is rendered with a bullet-point prefix.
    pub is_bullet: bool,
}

impl Paragraph {
    /// Create a plain paragraph.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            is_bullet: false,
        }
    }

    /// Create a paragraph rendered entirely in bold.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            is_bullet: false,
        }
    }

    /// Create a bullet paragraph.
    pub fn bullet(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            is_bullet: true,
        }
    }
}

/// A titled group of paragraphs.
///
/// Section order is meaningful: the generator reproduces sections in
/// exactly the order they are supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Rendered as a heading-styled paragraph.
    pub title: String,
    /// The section body, in order.
    pub paragraphs: Vec<Paragraph>,
}

impl Section {
    /// Create an empty section with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            paragraphs: Vec::new(),
        }
    }
}

/// Raster image formats a logo may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Map a MIME type to a supported format.
    ///
    /// `image/jpg` is a common non-standard spelling and normalizes to
    /// [`ImageFormat::Jpeg`]. Anything else is unsupported.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// Get file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }

    /// Get MIME type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Png => ct::PNG,
            Self::Jpeg => ct::JPEG,
        }
    }
}

/// An optional embedded logo image, decoded and ready to store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoInfo {
    /// Raw image bytes.
    pub data: Vec<u8>,
    /// The image format, derived from the declared MIME type.
    pub format: ImageFormat,
}

/// Top-level input aggregate for one document generation call.
#[derive(Debug, Clone)]
pub struct DocumentOptions {
    /// Document title, rendered with the Title style.
    pub title: String,
    /// Company the document is prepared for.
    pub company_name: String,
    /// Name recorded as the document creator.
    pub generated_by: String,
    /// Optional client named in the subtitle line.
    pub client_name: Option<String>,
    /// Optional ISO standard named in the compliance sentence and keywords.
    pub iso_standard: Option<String>,
    /// Document body, in order.
    pub sections: Vec<Section>,
    /// Optional logo embedded at the top of the document.
    pub logo: Option<LogoInfo>,
}
