//! Style definitions and styles.xml generation.
//!
//! The report format uses exactly four paragraph styles. Their relative
//! sizes (Title > Heading1 > Heading2 > Normal) carry the document's
//! visual hierarchy, so they are fixed here rather than configurable.

use super::escape_xml;
use crate::error::Result;
use std::fmt::Write as FmtWrite;

/// A paragraph style definition for writing.
#[derive(Debug, Clone)]
pub(crate) struct StyleDef {
    /// Style identifier (e.g., "Heading1")
    style_id: &'static str,
    /// UI-visible name (e.g., "Heading 1")
    name: &'static str,
    /// Whether this is the default paragraph style
    is_default: bool,
    /// ID of the style this is based on
    based_on: Option<&'static str>,
    /// Font family name
    font_name: &'static str,
    /// Font size in half-points (e.g., 22 = 11pt)
    font_size: u32,
    /// Font color (RGB hex), headings only
    color: Option<&'static str>,
    /// Paragraph alignment ("center" for the title page style)
    alignment: Option<&'static str>,
    /// Space before paragraph in twips
    space_before: Option<u32>,
}

impl StyleDef {
    /// The default body style: Calibri 11pt.
    pub(crate) fn normal() -> Self {
        Self {
            style_id: "Normal",
            name: "Normal",
            is_default: true,
            based_on: None,
            font_name: "Calibri",
            font_size: 22,
            color: None,
            alignment: None,
            space_before: None,
        }
    }

    /// Document-title heading: Calibri Light 16pt.
    pub(crate) fn heading_1() -> Self {
        Self {
            style_id: "Heading1",
            name: "Heading 1",
            is_default: false,
            based_on: Some("Normal"),
            font_name: "Calibri Light",
            font_size: 32,
            color: Some("2F5496"),
            alignment: None,
            space_before: Some(240),
        }
    }

    /// Section-title heading: Calibri 13pt.
    pub(crate) fn heading_2() -> Self {
        Self {
            style_id: "Heading2",
            name: "Heading 2",
            is_default: false,
            based_on: Some("Normal"),
            font_name: "Calibri",
            font_size: 26,
            color: Some("2F5496"),
            alignment: None,
            space_before: Some(160),
        }
    }

    /// Cover title: Calibri Light 18pt, centered.
    pub(crate) fn title() -> Self {
        Self {
            style_id: "Title",
            name: "Title",
            is_default: false,
            based_on: Some("Normal"),
            font_name: "Calibri Light",
            font_size: 36,
            color: None,
            alignment: Some("center"),
            space_before: None,
        }
    }

    /// Get the style identifier.
    #[inline]
    pub(crate) fn style_id(&self) -> &str {
        self.style_id
    }

    /// Get the font size in half-points.
    #[inline]
    pub(crate) fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Serialize the style definition.
    fn to_xml(&self, xml: &mut String) -> Result<()> {
        write!(xml, r#"<w:style w:type="paragraph" w:styleId="{}""#, self.style_id)?;
        if self.is_default {
            xml.push_str(r#" w:default="1""#);
        }
        xml.push('>');

        write!(xml, r#"<w:name w:val="{}"/>"#, escape_xml(self.name))?;
        if let Some(based_on) = self.based_on {
            write!(xml, r#"<w:basedOn w:val="{}"/>"#, based_on)?;
        }
        xml.push_str("<w:qFormat/>");

        if self.alignment.is_some() || self.space_before.is_some() {
            xml.push_str("<w:pPr>");
            if let Some(alignment) = self.alignment {
                write!(xml, r#"<w:jc w:val="{}"/>"#, alignment)?;
            }
            if let Some(before) = self.space_before {
                write!(xml, r#"<w:spacing w:before="{}" w:after="0"/>"#, before)?;
            }
            xml.push_str("</w:pPr>");
        }

        xml.push_str("<w:rPr>");
        write!(
            xml,
            r#"<w:rFonts w:ascii="{}" w:hAnsi="{}" w:cs="{}"/>"#,
            self.font_name, self.font_name, self.font_name
        )?;
        write!(xml, r#"<w:sz w:val="{}"/>"#, self.font_size)?;
        write!(xml, r#"<w:szCs w:val="{}"/>"#, self.font_size)?;
        if let Some(color) = self.color {
            write!(xml, r#"<w:color w:val="{}"/>"#, color)?;
        }
        xml.push_str("</w:rPr>");

        xml.push_str("</w:style>");
        Ok(())
    }
}

/// The four styles every generated document carries, in emission order.
pub(crate) fn document_styles() -> [StyleDef; 4] {
    [
        StyleDef::normal(),
        StyleDef::heading_1(),
        StyleDef::heading_2(),
        StyleDef::title(),
    ]
}

/// Generate the complete word/styles.xml part.
pub(crate) fn generate_styles_xml() -> Result<String> {
    let mut xml = String::with_capacity(2048);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    );

    // Document defaults match the Normal style.
    xml.push_str("<w:docDefaults>");
    xml.push_str("<w:rPrDefault><w:rPr>");
    xml.push_str(r#"<w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/>"#);
    xml.push_str(r#"<w:sz w:val="22"/>"#);
    xml.push_str(r#"<w:szCs w:val="22"/>"#);
    xml.push_str("</w:rPr></w:rPrDefault>");
    xml.push_str("<w:pPrDefault/>");
    xml.push_str("</w:docDefaults>");

    for style in document_styles() {
        style.to_xml(&mut xml)?;
    }

    xml.push_str("</w:styles>");
    Ok(xml)
}
