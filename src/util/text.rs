//! Best-effort decoding of blob bytes into displayable text.

use std::borrow::Cow;

use chardetng::EncodingDetector;

use crate::error::EncodingError;

/// A decoding step tried after strict UTF-8 fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// ISO-8859-1: every byte maps to the code point of the same value
    Latin1,
    /// Statistical detection; used only if the guessed encoding decodes
    /// the bytes without errors
    Detect,
}

const DEFAULT_FALLBACKS: &[Fallback] = &[Fallback::Latin1, Fallback::Detect];

/// Decodes bytes as UTF-8, then walks an ordered fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCodec {
    fallbacks: &'static [Fallback],
}

impl Default for TextCodec {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACKS)
    }
}

impl TextCodec {
    pub const fn new(fallbacks: &'static [Fallback]) -> Self {
        Self { fallbacks }
    }

    /// Decode `bytes`, borrowing when they are already valid UTF-8.
    ///
    /// Fails with the original UTF-8 error only when no fallback in the
    /// chain produces text.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>, EncodingError> {
        let utf8_error = match std::str::from_utf8(bytes) {
            Ok(text) => return Ok(Cow::Borrowed(text)),
            Err(e) => e,
        };

        for fallback in self.fallbacks {
            match fallback {
                Fallback::Latin1 => return Ok(encoding_rs::mem::decode_latin1(bytes)),
                Fallback::Detect => {
                    if let Some(text) = detect_and_decode(bytes) {
                        return Ok(text);
                    }
                }
            }
        }

        Err(EncodingError::from(utf8_error))
    }
}

fn detect_and_decode(bytes: &[u8]) -> Option<Cow<'_, str>> {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, false);
    tracing::trace!(encoding = encoding.name(), "detected blob encoding");
    encoding.decode_without_bom_handling_and_without_replacement(bytes)
}

/// Decode with the default chain (UTF-8, Latin-1, detection)
pub fn decode_text(bytes: &[u8]) -> Result<Cow<'_, str>, EncodingError> {
    TextCodec::default().decode(bytes)
}

/// Content is binary if it contains a NUL byte anywhere
pub fn is_binary(data: &[u8]) -> bool {
    data.contains(&0)
}

/// [`is_binary`] over a chunked byte sequence, stopping at the first hit
pub fn is_binary_chunks<I>(chunks: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    chunks.into_iter().any(|chunk| is_binary(chunk.as_ref()))
}
