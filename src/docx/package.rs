//! Package assembly: parts in, one .docx buffer out.

use crate::docx::model::DocumentOptions;
use crate::docx::writer::{document, image, props, rels, styles};
use crate::error::Result;
use crate::opc::constants::{content_type as ct, relationship_type as rt};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use marula_zip::{ArchiveWriter, DosDateTime};
use std::path::Path;

/// A generated document, ready to persist or hand to a download link.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    /// The complete .docx package bytes.
    pub buffer: Vec<u8>,
    /// The buffer re-encoded as a `data:` URI with the WordprocessingML
    /// MIME type, suitable for a browser download attribute.
    pub download_url: String,
}

impl GeneratedDocument {
    /// Write the package to a file.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, &self.buffer)?;
        Ok(())
    }
}

/// Generate a .docx package from the given options.
///
/// Pure except for sampling the clock once; the sampled instant feeds the
/// ZIP entry timestamps, the "generated on" sentence, and the core
/// properties, so one call sees one consistent time.
///
/// # Examples
///
/// ```rust
/// use shedoc::{DocumentOptions, generate_document};
///
/// let options = DocumentOptions {
///     title: "Baseline Risk Assessment".to_string(),
///     company_name: "Acme Mining".to_string(),
///     generated_by: "J. Mokoena".to_string(),
///     client_name: None,
///     iso_standard: None,
///     sections: Vec::new(),
///     logo: None,
/// };
/// let document = generate_document(&options)?;
/// assert!(document.download_url.starts_with("data:application/vnd."));
/// # Ok::<(), shedoc::DocError>(())
/// ```
pub fn generate_document(options: &DocumentOptions) -> Result<GeneratedDocument> {
    generate_document_at(options, Utc::now())
}

/// Generate a .docx package with an explicit timestamp.
///
/// Identical inputs and timestamp produce byte-identical output.
pub fn generate_document_at(
    options: &DocumentOptions,
    now: DateTime<Utc>,
) -> Result<GeneratedDocument> {
    let document_xml = document::generate_document_xml(options, &now)?;
    let styles_xml = styles::generate_styles_xml()?;
    let core_xml = props::generate_core_props_xml(options, &now);
    let app_xml = props::generate_app_props_xml(options);

    let mut writer = ArchiveWriter::with_timestamp(DosDateTime::from_datetime(&now));
    writer.write_stored("[Content_Types].xml", content_types_xml(options).as_bytes())?;
    writer.write_stored("_rels/.rels", root_rels_xml().as_bytes())?;
    writer.write_stored("docProps/core.xml", core_xml.as_bytes())?;
    writer.write_stored("docProps/app.xml", app_xml.as_bytes())?;
    writer.write_stored("word/document.xml", document_xml.as_bytes())?;
    writer.write_stored("word/styles.xml", styles_xml.as_bytes())?;
    writer.write_stored(
        "word/_rels/document.xml.rels",
        document_rels_xml(options).as_bytes(),
    )?;
    if let Some(logo) = &options.logo {
        let name = format!("word/media/logo.{}", logo.format.extension());
        writer.write_stored(&name, &logo.data)?;
    }

    let buffer = writer.finish_to_bytes()?;
    let download_url = format!("data:{};base64,{}", ct::WML_DOCUMENT, STANDARD.encode(&buffer));
    Ok(GeneratedDocument {
        buffer,
        download_url,
    })
}

/// Build `[Content_Types].xml`, declaring the logo extension if present.
fn content_types_xml(options: &DocumentOptions) -> String {
    let mut types = rels::ContentTypes::new();
    types.add_override("/word/document.xml", ct::WML_DOCUMENT_MAIN);
    types.add_override("/word/styles.xml", ct::WML_STYLES);
    types.add_override("/docProps/core.xml", ct::OPC_CORE_PROPERTIES);
    types.add_override("/docProps/app.xml", ct::OFC_EXTENDED_PROPERTIES);
    if let Some(logo) = &options.logo {
        types.add_default(logo.format.extension(), logo.format.content_type());
    }
    types.to_xml()
}

/// Build the package-level `_rels/.rels` part.
fn root_rels_xml() -> String {
    let mut root = rels::Relationships::new();
    root.add("rId1", rt::OFFICE_DOCUMENT, "word/document.xml");
    root.add("rId2", rt::CORE_PROPERTIES, "docProps/core.xml");
    root.add("rId3", rt::EXTENDED_PROPERTIES, "docProps/app.xml");
    root.to_xml()
}

/// Build `word/_rels/document.xml.rels`, wiring the logo when present.
fn document_rels_xml(options: &DocumentOptions) -> String {
    let mut doc_rels = rels::Relationships::new();
    doc_rels.add("rId1", rt::STYLES, "styles.xml");
    if let Some(logo) = &options.logo {
        doc_rels.add(
            image::LOGO_REL_ID,
            rt::IMAGE,
            format!("media/logo.{}", logo.format.extension()),
        );
    }
    doc_rels.to_xml()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::model::{ImageFormat, LogoInfo, Paragraph, Section};
    use chrono::TimeZone;
    use std::io::{Cursor, Read};

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, 10, 0, 0).unwrap()
    }

    fn base_options() -> DocumentOptions {
        let mut section = Section::new("Scope");
        section.paragraphs.push(Paragraph::bullet("Site clearing"));
        section.paragraphs.push(Paragraph::new("General notes"));
        DocumentOptions {
            title: "Baseline Risk Assessment".to_string(),
            company_name: "Acme Mining".to_string(),
            generated_by: "J. Mokoena".to_string(),
            client_name: Some("Westfield".to_string()),
            iso_standard: Some("ISO 45001".to_string()),
            sections: vec![section],
            logo: None,
        }
    }

    fn png_logo() -> LogoInfo {
        LogoInfo {
            data: vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A],
            format: ImageFormat::Png,
        }
    }

    fn part_names(buffer: &[u8]) -> Vec<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(buffer.to_vec())).unwrap();
        (0..archive.len())
            .map(|index| archive.by_index(index).unwrap().name().to_string())
            .collect()
    }

    fn read_part(buffer: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(buffer.to_vec())).unwrap();
        let mut part = archive.by_name(name).unwrap();
        let mut contents = String::new();
        part.read_to_string(&mut contents).unwrap();
        contents
    }

    #[test]
    fn test_part_set_without_logo() {
        let result = generate_document_at(&base_options(), timestamp()).unwrap();
        assert_eq!(
            part_names(&result.buffer),
            vec![
                "[Content_Types].xml",
                "_rels/.rels",
                "docProps/core.xml",
                "docProps/app.xml",
                "word/document.xml",
                "word/styles.xml",
                "word/_rels/document.xml.rels",
            ]
        );
    }

    #[test]
    fn test_part_set_with_logo() {
        let mut options = base_options();
        options.logo = Some(png_logo());
        let result = generate_document_at(&options, timestamp()).unwrap();
        let names = part_names(&result.buffer);
        assert_eq!(names.len(), 8);
        assert_eq!(names[7], "word/media/logo.png");
    }

    #[test]
    fn test_logo_relationship_and_content_type() {
        let mut options = base_options();
        options.logo = Some(png_logo());
        let result = generate_document_at(&options, timestamp()).unwrap();

        let doc_rels = read_part(&result.buffer, "word/_rels/document.xml.rels");
        assert!(doc_rels.contains(r#"Id="rIdLogo""#));
        assert!(doc_rels.contains(r#"Target="media/logo.png""#));

        let types = read_part(&result.buffer, "[Content_Types].xml");
        assert!(types.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
    }

    #[test]
    fn test_no_logo_means_no_media_or_relationship() {
        let result = generate_document_at(&base_options(), timestamp()).unwrap();
        assert!(!part_names(&result.buffer).iter().any(|n| n.starts_with("word/media/")));

        let doc_rels = read_part(&result.buffer, "word/_rels/document.xml.rels");
        assert!(!doc_rels.contains("rIdLogo"));

        let types = read_part(&result.buffer, "[Content_Types].xml");
        assert!(!types.contains("image/"));
    }

    #[test]
    fn test_rejected_data_uri_produces_logoless_package() {
        let mut options = base_options();
        // GIF is outside the allow-list, so decoding degrades to no logo.
        options.logo = crate::media::decode_data_uri("data:image/gif;base64,R0lGODlh");
        assert!(options.logo.is_none());

        let result = generate_document_at(&options, timestamp()).unwrap();
        assert!(!part_names(&result.buffer).iter().any(|n| n.starts_with("word/media/")));
        let doc_rels = read_part(&result.buffer, "word/_rels/document.xml.rels");
        assert!(!doc_rels.contains("rIdLogo"));
    }

    #[test]
    fn test_jpeg_logo_part_name_and_type() {
        let mut options = base_options();
        options.logo = Some(LogoInfo {
            data: vec![0xFF, 0xD8, 0xFF, 0xE0],
            format: ImageFormat::Jpeg,
        });
        let result = generate_document_at(&options, timestamp()).unwrap();
        assert!(part_names(&result.buffer).contains(&"word/media/logo.jpeg".to_string()));

        let types = read_part(&result.buffer, "[Content_Types].xml");
        assert!(types.contains(r#"<Default Extension="jpeg" ContentType="image/jpeg"/>"#));
    }

    #[test]
    fn test_logo_bytes_stored_verbatim() {
        let mut options = base_options();
        options.logo = Some(png_logo());
        let result = generate_document_at(&options, timestamp()).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(result.buffer)).unwrap();
        let mut part = archive.by_name("word/media/logo.png").unwrap();
        let mut contents = Vec::new();
        part.read_to_end(&mut contents).unwrap();
        assert_eq!(contents, png_logo().data);
    }

    #[test]
    fn test_deterministic_with_pinned_timestamp() {
        let first = generate_document_at(&base_options(), timestamp()).unwrap();
        let second = generate_document_at(&base_options(), timestamp()).unwrap();
        assert_eq!(first.buffer, second.buffer);
        assert_eq!(first.download_url, second.download_url);
    }

    #[test]
    fn test_different_timestamps_differ() {
        let first = generate_document_at(&base_options(), timestamp()).unwrap();
        let later = Utc.with_ymd_and_hms(2026, 8, 8, 10, 0, 0).unwrap();
        let second = generate_document_at(&base_options(), later).unwrap();
        assert_ne!(first.buffer, second.buffer);
    }

    #[test]
    fn test_download_url_decodes_to_buffer() {
        let result = generate_document_at(&base_options(), timestamp()).unwrap();
        let prefix =
            "data:application/vnd.openxmlformats-officedocument.wordprocessingml.document;base64,";
        assert!(result.download_url.starts_with(prefix));
        let payload = &result.download_url[prefix.len()..];
        assert_eq!(STANDARD.decode(payload).unwrap(), result.buffer);
    }

    #[test]
    fn test_zero_sections_still_valid_package() {
        let mut options = base_options();
        options.sections.clear();
        let result = generate_document_at(&options, timestamp()).unwrap();
        assert_eq!(part_names(&result.buffer).len(), 7);
        let document = read_part(&result.buffer, "word/document.xml");
        assert!(document.contains("Baseline Risk Assessment"));
        assert!(!document.contains("Heading2"));
    }

    #[test]
    fn test_every_xml_part_is_well_formed() {
        use quick_xml::events::Event;

        let mut options = base_options();
        options.title = r#"Title with <brackets> & "quotes""#.to_string();
        options.logo = Some(png_logo());
        let result = generate_document_at(&options, timestamp()).unwrap();

        for name in part_names(&result.buffer) {
            if !name.ends_with(".xml") && !name.ends_with(".rels") {
                continue;
            }
            let xml = read_part(&result.buffer, &name);
            let mut reader = quick_xml::Reader::from_str(&xml);
            let mut buf = Vec::new();
            loop {
                match reader.read_event_into(&mut buf) {
                    Ok(Event::Eof) => break,
                    Ok(_) => {}
                    Err(e) => panic!("part {} is not well-formed: {}", name, e),
                }
                buf.clear();
            }
        }
    }

    #[test]
    fn test_write_to_disk() {
        let result = generate_document_at(&base_options(), timestamp()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.docx");
        result.write_to(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), result.buffer);
    }
}
