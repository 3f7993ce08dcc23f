//! Relationship and content-type part builders.

use super::escape_xml;
use crate::opc::constants::{content_type as ct, namespace as ns};
use std::collections::HashMap;

/// A single relationship from one part to another.
#[derive(Debug, Clone)]
pub(crate) struct Relationship {
    r_id: String,
    reltype: &'static str,
    target: String,
}

/// An ordered collection of relationships serializing to a `.rels` part.
#[derive(Debug, Default)]
pub(crate) struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a relationship with an explicit id.
    pub(crate) fn add(&mut self, r_id: impl Into<String>, reltype: &'static str, target: impl Into<String>) {
        self.rels.push(Relationship {
            r_id: r_id.into(),
            reltype,
            target: target.into(),
        });
    }

    /// Serialize relationships to XML format.
    ///
    /// Relationships are sorted by id for consistent output.
    pub(crate) fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(&format!(r#"<Relationships xmlns="{}">"#, ns::OPC_RELATIONSHIPS));

        let mut rels: Vec<&Relationship> = self.rels.iter().collect();
        rels.sort_by(|a, b| a.r_id.cmp(&b.r_id));

        for rel in rels {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(&rel.r_id),
                escape_xml(rel.reltype),
                escape_xml(&rel.target)
            ));
        }

        xml.push_str("</Relationships>");
        xml
    }
}

/// Builder for the `[Content_Types].xml` part.
///
/// Manages Default (by extension) and Override (by part name) entries.
#[derive(Debug)]
pub(crate) struct ContentTypes {
    /// Default content types by extension
    defaults: HashMap<String, String>,
    /// Override content types by part name
    overrides: HashMap<String, String>,
}

impl ContentTypes {
    /// Create a builder seeded with the standard defaults.
    pub(crate) fn new() -> Self {
        let mut defaults = HashMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: HashMap::new(),
        }
    }

    /// Add a Default mapping for a file extension.
    pub(crate) fn add_default(&mut self, extension: &str, content_type: &str) {
        self.defaults
            .insert(extension.to_string(), content_type.to_string());
    }

    /// Add an Override mapping for a specific part name.
    pub(crate) fn add_override(&mut self, partname: &str, content_type: &str) {
        self.overrides
            .insert(partname.to_string(), content_type.to_string());
    }

    /// Generate the XML for `[Content_Types].xml`.
    ///
    /// Entries are emitted sorted (defaults by extension, overrides by
    /// part name) so the same package always serializes identically.
    pub(crate) fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(&format!(r#"<Types xmlns="{}">"#, ns::OPC_CONTENT_TYPES));

        let mut extensions: Vec<&String> = self.defaults.keys().collect();
        extensions.sort();
        for extension in extensions {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(extension),
                escape_xml(&self.defaults[extension])
            ));
        }

        let mut partnames: Vec<&String> = self.overrides.keys().collect();
        partnames.sort();
        for partname in partnames {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(&self.overrides[partname])
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}
