use crossterm::event::{KeyCode, KeyEvent};

const RUSSIAN: &str = "йцукенгшщзфывапролдячсмитьЙЦУКЕНГШЩЗФЫВАПРОЛДЯЧСМИТЬ";
const QWERTY: &str = "qwertyuiopasdfghjklzxcvbnmQWERTYUIOPASDFGHJKLZXCVBNM";

/// Map a character to the QWERTY key in the same position, so letter
/// bindings keep working under a ЙЦУКЕН layout.
pub fn to_qwerty(c: char) -> char {
    RUSSIAN
        .chars()
        .zip(QWERTY.chars())
        .find_map(|(from, to)| (from == c).then_some(to))
        .unwrap_or(c)
}

/// Check if a KeyCode matches the expected character, accounting for keyboard layouts.
/// Uppercase `expected` matches case-sensitively, lowercase matches either case.
pub fn key_matches(key: &KeyCode, expected: char) -> bool {
    match key {
        KeyCode::Char(c) => {
            let normalized = to_qwerty(*c);
            if expected.is_uppercase() {
                normalized == expected
            } else {
                normalized.to_ascii_lowercase() == expected
            }
        }
        _ => false,
    }
}

/// User intents derived from keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    // Navigation
    MoveUp,
    MoveDown,
    Enter,
    Back,

    // Paging (history pages, commit and blob scrolling)
    NextPage,
    PrevPage,

    ShowHistory,
    NextBranch,
    ToggleRepoOrder,

    Quit,
}

/// View modes for mapping keys to intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    RepoList,
    Tree,
    History,
    Commit,
    Blob,
}

/// Map a key event to a user intent.
///
/// `can_go_back` decides whether Esc steps back or quits.
pub fn map_key_to_intent(key: &KeyEvent, mode: ViewMode, can_go_back: bool) -> Option<Intent> {
    let code = &key.code;

    if key_matches(code, 'q') {
        return Some(Intent::Quit);
    }
    if *code == KeyCode::Esc {
        return Some(if can_go_back { Intent::Back } else { Intent::Quit });
    }
    // Checked before 'h', which matches both cases
    if key_matches(code, 'H') && matches!(mode, ViewMode::Tree | ViewMode::Blob) {
        return Some(Intent::ShowHistory);
    }
    if *code == KeyCode::Up || key_matches(code, 'k') {
        return Some(Intent::MoveUp);
    }
    if *code == KeyCode::Down || key_matches(code, 'j') {
        return Some(Intent::MoveDown);
    }
    if *code == KeyCode::Backspace || *code == KeyCode::Left || key_matches(code, 'h') {
        return Some(Intent::Back);
    }

    match mode {
        ViewMode::RepoList => {
            if *code == KeyCode::Enter || *code == KeyCode::Right || key_matches(code, 'l') {
                return Some(Intent::Enter);
            }
            if key_matches(code, 'u') {
                return Some(Intent::ToggleRepoOrder);
            }
            None
        }
        ViewMode::Tree => {
            if *code == KeyCode::Enter || *code == KeyCode::Right || key_matches(code, 'l') {
                return Some(Intent::Enter);
            }
            if key_matches(code, 'b') {
                return Some(Intent::NextBranch);
            }
            None
        }
        ViewMode::History => {
            if *code == KeyCode::Enter || *code == KeyCode::Right || key_matches(code, 'l') {
                return Some(Intent::Enter);
            }
            if *code == KeyCode::PageDown || key_matches(code, 'n') {
                return Some(Intent::NextPage);
            }
            if *code == KeyCode::PageUp || key_matches(code, 'p') {
                return Some(Intent::PrevPage);
            }
            None
        }
        ViewMode::Commit => {
            if *code == KeyCode::Enter || *code == KeyCode::Right || key_matches(code, 'l') {
                return Some(Intent::Enter);
            }
            if *code == KeyCode::PageDown || *code == KeyCode::Char(' ') {
                return Some(Intent::NextPage);
            }
            if *code == KeyCode::PageUp {
                return Some(Intent::PrevPage);
            }
            None
        }
        ViewMode::Blob => {
            if *code == KeyCode::PageDown || *code == KeyCode::Char(' ') {
                return Some(Intent::NextPage);
            }
            if *code == KeyCode::PageUp {
                return Some(Intent::PrevPage);
            }
            None
        }
    }
}
