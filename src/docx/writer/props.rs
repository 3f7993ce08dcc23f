//! Package metadata parts: docProps/core.xml and docProps/app.xml.
//!
//! These are cosmetic (file-properties dialogs) but strict OOXML
//! validators reject packages without them, so they are always emitted.

use super::escape_xml;
use crate::docx::model::DocumentOptions;
use chrono::{DateTime, Utc};

/// Keywords recorded when no ISO standard is supplied.
const DEFAULT_KEYWORDS: &str = "ISO 45001";

/// Format an instant as W3CDTF, the profile core properties require.
pub(crate) fn w3cdtf(datetime: &DateTime<Utc>) -> String {
    datetime.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Generate docProps/core.xml (Dublin Core properties).
pub(crate) fn generate_core_props_xml(options: &DocumentOptions, now: &DateTime<Utc>) -> String {
    let timestamp = w3cdtf(now);
    let keywords = options.iso_standard.as_deref().unwrap_or(DEFAULT_KEYWORDS);

    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(concat!(
        r#"<cp:coreProperties"#,
        r#" xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties""#,
        r#" xmlns:dc="http://purl.org/dc/elements/1.1/""#,
        r#" xmlns:dcterms="http://purl.org/dc/terms/""#,
        r#" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
    ));
    xml.push_str(&format!("<dc:title>{}</dc:title>", escape_xml(&options.title)));
    xml.push_str(&format!(
        "<dc:creator>{}</dc:creator>",
        escape_xml(&options.generated_by)
    ));
    xml.push_str(&format!(
        "<cp:keywords>{}</cp:keywords>",
        escape_xml(keywords)
    ));
    xml.push_str(&format!(
        "<cp:lastModifiedBy>{}</cp:lastModifiedBy>",
        escape_xml(&options.generated_by)
    ));
    xml.push_str(&format!(
        r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
        timestamp
    ));
    xml.push_str(&format!(
        r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
        timestamp
    ));
    xml.push_str("</cp:coreProperties>");
    xml
}

/// Generate docProps/app.xml (extended properties).
pub(crate) fn generate_app_props_xml(options: &DocumentOptions) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(concat!(
        r#"<Properties"#,
        r#" xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties""#,
        r#" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
    ));
    xml.push_str(&format!(
        "<Application>{}</Application>",
        concat!("shedoc/", env!("CARGO_PKG_VERSION"))
    ));
    xml.push_str(&format!(
        "<Company>{}</Company>",
        escape_xml(&options.company_name)
    ));
    xml.push_str("</Properties>");
    xml
}
