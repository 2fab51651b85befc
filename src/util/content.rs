use super::text::is_binary;

pub const OCTET_STREAM: &str = "application/octet-stream";

/// MIME type and text encoding to serve content with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    pub mime: String,
    pub encoding: Option<&'static str>,
}

impl ContentType {
    pub fn is_text(&self) -> bool {
        self.encoding.is_some()
    }
}

/// Guess a MIME type from the file name's extension
pub fn guess_mime(filename: &str) -> Option<&'static str> {
    mime_guess::from_path(filename).first_raw()
}

/// Binary content is typed by extension; anything else is served as
/// UTF-8 plain text.
pub fn classify(filename: &str, data: &[u8]) -> ContentType {
    if is_binary(data) {
        ContentType {
            mime: guess_mime(filename).unwrap_or(OCTET_STREAM).to_string(),
            encoding: None,
        }
    } else {
        ContentType {
            mime: "text/plain".to_string(),
            encoding: Some("utf-8"),
        }
    }
}

/// Whether a file should render inline as an image
pub fn is_image(filename: &str) -> bool {
    guess_mime(filename).is_some_and(|mime| mime.starts_with("image/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_uses_extension() {
        let png = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
        let ct = classify("logo.png", png);
        assert_eq!(ct.mime, "image/png");
        assert_eq!(ct.encoding, None);
        assert!(!ct.is_text());
    }

    #[test]
    fn test_binary_unknown_extension() {
        let ct = classify("blob.unknownext", b"\0\x01\x02");
        assert_eq!(ct.mime, OCTET_STREAM);
        let ct = classify("Makefile", b"\0");
        assert_eq!(ct.mime, OCTET_STREAM);
    }

    #[test]
    fn test_text_is_always_plain_utf8() {
        let ct = classify("index.html", b"<html></html>");
        assert_eq!(ct.mime, "text/plain");
        assert_eq!(ct.encoding, Some("utf-8"));

        // Even an image extension without NUL bytes is text
        let ct = classify("drawing.svg", b"<svg/>");
        assert_eq!(ct.mime, "text/plain");
    }

    #[test]
    fn test_is_image() {
        assert!(is_image("photo.JPG"));
        assert!(is_image("icons/app.gif"));
        assert!(!is_image("main.rs"));
        assert!(!is_image("README"));
    }
}
