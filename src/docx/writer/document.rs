//! Main document part (word/document.xml) generation.

use super::{escape_xml, image};
use crate::docx::model::{DocumentOptions, Paragraph};
use crate::error::Result;
use chrono::{DateTime, Utc};
use std::fmt::Write as FmtWrite;

/// A4 page width in twentieths of a point.
const PAGE_WIDTH_TWIPS: u32 = 11_907;

/// A4 page height in twentieths of a point.
const PAGE_HEIGHT_TWIPS: u32 = 16_840;

/// Uniform page margin (one inch) in twentieths of a point.
const PAGE_MARGIN_TWIPS: u32 = 1_440;

/// Generate the complete word/document.xml part.
///
/// Body order is fixed: optional logo drawing, title, the
/// "prepared for" subtitle, the "generated on" line with its compliance
/// sentence, then every section in input order, a trailing empty
/// paragraph, and the section properties.
pub(crate) fn generate_document_xml(
    options: &DocumentOptions,
    now: &DateTime<Utc>,
) -> Result<String> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(concat!(
        r#"<w:document"#,
        r#" xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#,
        r#" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships""#,
        r#" xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing""#,
        r#" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main">"#,
    ));
    xml.push_str("<w:body>");

    if options.logo.is_some() {
        image::write_logo_paragraph(&mut xml)?;
    }

    write_styled_paragraph(&mut xml, &options.title, Some("Title"), false, false)?;
    write_styled_paragraph(&mut xml, &subtitle_line(options), None, true, false)?;
    write_styled_paragraph(&mut xml, &generated_line(options, now), None, false, false)?;

    for section in &options.sections {
        write_styled_paragraph(&mut xml, &section.title, Some("Heading2"), false, false)?;
        for paragraph in &section.paragraphs {
            write_body_paragraph(&mut xml, paragraph)?;
        }
    }

    xml.push_str("<w:p/>");

    xml.push_str("<w:sectPr>");
    write!(
        xml,
        r#"<w:pgSz w:w="{}" w:h="{}"/>"#,
        PAGE_WIDTH_TWIPS, PAGE_HEIGHT_TWIPS
    )?;
    write!(
        xml,
        r#"<w:pgMar w:top="{m}" w:right="{m}" w:bottom="{m}" w:left="{m}" w:header="720" w:footer="720"/>"#,
        m = PAGE_MARGIN_TWIPS
    )?;
    xml.push_str("</w:sectPr>");

    xml.push_str("</w:body>");
    xml.push_str("</w:document>");
    Ok(xml)
}

/// The "prepared for" subtitle, naming the client when one is set.
fn subtitle_line(options: &DocumentOptions) -> String {
    match &options.client_name {
        Some(client) => format!(
            "Prepared for {} | Client: {}",
            options.company_name, client
        ),
        None => format!("Prepared for {}", options.company_name),
    }
}

/// The generation line, ending in exactly one compliance sentence.
fn generated_line(options: &DocumentOptions, now: &DateTime<Utc>) -> String {
    let sentence = match &options.iso_standard {
        Some(standard) => format!(
            "This document supports compliance with {} requirements.",
            standard
        ),
        None => "This document supports compliance with ISO safety management expectations."
            .to_string(),
    };
    format!(
        "Generated on {} by {}. {}",
        now.format("%-d %B %Y"),
        options.generated_by,
        sentence
    )
}

/// Render one paragraph from the content model.
fn write_body_paragraph(xml: &mut String, paragraph: &Paragraph) -> Result<()> {
    write_styled_paragraph(xml, &paragraph.text, None, paragraph.bold, paragraph.is_bullet)
}

/// Append a `w:p` element with optional style, bold run and bullet prefix.
///
/// Bullets are the literal "• " prefix, not a numbering construct: the
/// content model has no nested lists, so a visual marker is all the
/// reports need.
fn write_styled_paragraph(
    xml: &mut String,
    text: &str,
    style: Option<&str>,
    bold: bool,
    bullet: bool,
) -> Result<()> {
    xml.push_str("<w:p>");
    if let Some(style) = style {
        write!(xml, r#"<w:pPr><w:pStyle w:val="{}"/></w:pPr>"#, style)?;
    }
    xml.push_str("<w:r>");
    if bold {
        xml.push_str("<w:rPr><w:b/></w:rPr>");
    }

    let rendered = if bullet {
        format!("\u{2022} {}", text)
    } else {
        text.to_string()
    };
    if !rendered.is_empty() {
        write!(
            xml,
            r#"<w:t xml:space="preserve">{}</w:t>"#,
            escape_xml(&rendered)
        )?;
    }

    xml.push_str("</w:r></w:p>");
    Ok(())
}
