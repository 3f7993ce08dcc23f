//! Inline logo drawing for the document header area.

use crate::error::Result;
use std::fmt::Write as FmtWrite;

/// Relationship id wiring the drawing to its media part.
pub(crate) const LOGO_REL_ID: &str = "rIdLogo";

/// Logo display width in EMUs (914400 per inch): about 7.2 cm.
pub(crate) const LOGO_WIDTH_EMU: u64 = 2_743_200;

/// Logo display height in EMUs: about 3 cm.
pub(crate) const LOGO_HEIGHT_EMU: u64 = 1_143_000;

/// Append the inline drawing paragraph that displays the logo.
///
/// The drawing references [`LOGO_REL_ID`]; the document relationships part
/// must map that id to the stored media entry or readers will show a
/// broken-image placeholder.
pub(crate) fn write_logo_paragraph(xml: &mut String) -> Result<()> {
    xml.push_str("<w:p><w:r>");
    write!(
        xml,
        r#"<w:drawing><wp:inline distT="0" distB="0" distL="0" distR="0"><wp:extent cx="{cx}" cy="{cy}"/><wp:effectExtent l="0" t="0" r="0" b="0"/><wp:docPr id="1" name="Company Logo"/><wp:cNvGraphicFramePr><a:graphicFrameLocks xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" noChangeAspect="1"/></wp:cNvGraphicFramePr><a:graphic xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture"><pic:pic xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture"><pic:nvPicPr><pic:cNvPr id="0" name="Company Logo"/><pic:cNvPicPr/></pic:nvPicPr><pic:blipFill><a:blip r:embed="{rid}"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill><pic:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></pic:spPr></pic:pic></a:graphicData></a:graphic></wp:inline></w:drawing>"#,
        cx = LOGO_WIDTH_EMU,
        cy = LOGO_HEIGHT_EMU,
        rid = LOGO_REL_ID,
    )?;
    xml.push_str("</w:r></w:p>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawing_references_logo_relationship() {
        let mut xml = String::new();
        write_logo_paragraph(&mut xml).unwrap();
        assert!(xml.contains(r#"<a:blip r:embed="rIdLogo"/>"#));
        assert!(xml.contains(r#"cx="2743200" cy="1143000""#));
        assert!(xml.starts_with("<w:p>"));
        assert!(xml.ends_with("</w:p>"));
    }
}
