use tracing::debug;

use crate::error::{BrowseError, Result};
use crate::model::{BlobObject, Listing, TreeOrBlob};
use crate::util::{classify, decode_text, is_image, ContentType};

use super::{list_location, resolve_path, store_error, RequestContext, Target};

/// Files above this size are not rendered inline
pub const TOO_LARGE: usize = 100 * 1024;

/// A file prepared for display next to its directory listing
#[derive(Debug, Clone)]
pub struct BlobView {
    pub path: String,
    pub filename: String,
    pub blob: BlobObject,
    /// Listing of the directory containing the file
    pub listing: Listing,
    pub content_type: ContentType,
    pub is_image: bool,
    pub too_large: bool,
    /// Decoded content; none for binary, oversized or undecodable files
    pub text: Option<String>,
}

impl BlobView {
    pub fn is_binary(&self) -> bool {
        !self.content_type.is_text()
    }
}

/// Content to deliver verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawContent {
    pub mime: String,
    pub encoding: Option<&'static str>,
    pub body: Vec<u8>,
}

pub fn view_blob(ctx: &RequestContext) -> Result<BlobView> {
    let location = resolve_path(ctx.repo(), ctx.commit(), ctx.path())?;
    let listing = list_location(&location);
    let blob = match location.target {
        Target::File(blob) => blob,
        Target::Directory => return Err(BrowseError::NotAFile(ctx.path().to_string())),
    };

    let filename = ctx.filename().to_string();
    let content_type = classify(&filename, &blob.data);
    let too_large = blob.size() > TOO_LARGE;
    let text = if content_type.is_text() && !too_large {
        match decode_text(&blob.data) {
            Ok(text) => Some(text.into_owned()),
            Err(e) => {
                debug!(path = ctx.path(), error = %e, "showing undecodable blob as binary");
                None
            }
        }
    } else {
        None
    };

    Ok(BlobView {
        path: ctx.path().to_string(),
        is_image: is_image(&filename),
        filename,
        blob,
        listing,
        content_type,
        too_large,
        text,
    })
}

/// The file at the context's path with the MIME type and encoding to serve it with
pub fn raw_blob(ctx: &RequestContext) -> Result<RawContent> {
    let object = ctx
        .repo()
        .store()
        .tree_or_blob(ctx.commit(), ctx.path())
        .map_err(|e| store_error(e, || ctx.no_path_error()))?;
    let blob = match object {
        TreeOrBlob::Blob(blob) => blob,
        TreeOrBlob::Tree(_) => return Err(BrowseError::NotAFile(ctx.path().to_string())),
    };

    let content_type = classify(ctx.filename(), &blob.data);
    Ok(RawContent {
        mime: content_type.mime,
        encoding: content_type.encoding,
        body: blob.data,
    })
}
