//! Logo input decoding.
//!
//! Logos arrive from the surrounding application as `data:` URIs. A
//! missing or unusable logo must never block document generation, so
//! decoding degrades silently to "no logo" instead of returning errors.

use crate::docx::model::{ImageFormat, LogoInfo};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Decode a `data:<mime>;base64,<payload>` string into a logo.
///
/// Returns `None` when the string does not match the data-URI shape, the
/// payload is not valid base64, or the MIME type is outside the PNG/JPEG
/// allow-list (`image/jpg` is accepted as a JPEG spelling).
///
/// # Examples
///
/// ```rust
/// use shedoc::{ImageFormat, decode_data_uri};
///
/// let logo = decode_data_uri("data:image/png;base64,iVBORw0KGgo=").unwrap();
/// assert_eq!(logo.format, ImageFormat::Png);
/// assert!(decode_data_uri("data:image/gif;base64,R0lGODlh").is_none());
/// ```
pub fn decode_data_uri(value: &str) -> Option<LogoInfo> {
    let rest = value.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    let format = ImageFormat::from_mime(mime.trim().to_ascii_lowercase().as_str())?;
    let data = STANDARD.decode(payload.trim()).ok()?;
    Some(LogoInfo { data, format })
}

#[cfg(test)]
mod tests {
    use super::*;

    // 8-byte PNG signature
    const PNG_PAYLOAD: &str = "iVBORw0KGgo=";

    #[test]
    fn test_png_data_uri() {
        let logo = decode_data_uri(&format!("data:image/png;base64,{}", PNG_PAYLOAD)).unwrap();
        assert_eq!(logo.format, ImageFormat::Png);
        assert_eq!(&logo.data[..4], &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[test]
    fn test_jpg_spelling_accepted() {
        let logo = decode_data_uri("data:image/jpg;base64,/9j/4AA=").unwrap();
        assert_eq!(logo.format, ImageFormat::Jpeg);
        assert_eq!(logo.format.extension(), "jpeg");
    }

    #[test]
    fn test_unsupported_mime_rejected() {
        assert!(decode_data_uri("data:image/gif;base64,R0lGODlh").is_none());
        assert!(decode_data_uri("data:text/plain;base64,aGk=").is_none());
    }

    #[test]
    fn test_malformed_input_rejected() {
        assert!(decode_data_uri("").is_none());
        assert!(decode_data_uri("image/png;base64,abcd").is_none());
        assert!(decode_data_uri("data:image/png;base64,not base64!!").is_none());
        assert!(decode_data_uri("data:image/png,rawpayload").is_none());
    }

    #[test]
    fn test_mime_case_insensitive() {
        let logo = decode_data_uri(&format!("data:IMAGE/PNG;base64,{}", PNG_PAYLOAD)).unwrap();
        assert_eq!(logo.format, ImageFormat::Png);
    }
}
