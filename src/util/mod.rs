pub mod content;
pub mod format;
pub mod path;
pub mod text;

pub use content::{classify, is_image, ContentType};
pub use format::{
    extract_author_name, format_size, format_timestamp, shorten_id, shorten_message, time_since,
    time_since_now,
};
pub use path::{join_path, normalize_path, parent_path, split_path, subpaths, Subpaths};
pub use text::{decode_text, is_binary, is_binary_chunks, Fallback, TextCodec};
