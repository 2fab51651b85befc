mod keyboard;

pub use keyboard::{key_matches, map_key_to_intent, to_qwerty, Intent, ViewMode};
