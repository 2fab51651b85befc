use std::rc::Rc;

use tracing::{debug, warn};

use crate::browse::RequestContext;
use crate::error::Result;
use crate::input::{Intent, ViewMode};
use crate::repository::{RepoRegistry, Repository};

use super::blob_viewmodel::SCROLL_PAGE;
use super::selection::Selectable;
use super::{BlobViewModel, CommitViewModel, HistoryViewModel, RepoListViewModel, TreeViewModel};

/// One screen of the browser
pub enum Screen {
    RepoList(RepoListViewModel),
    Tree(TreeViewModel),
    History(HistoryViewModel),
    Commit(CommitViewModel),
    Blob(BlobViewModel),
}

impl Screen {
    pub fn view_mode(&self) -> ViewMode {
        match self {
            Screen::RepoList(_) => ViewMode::RepoList,
            Screen::Tree(_) => ViewMode::Tree,
            Screen::History(_) => ViewMode::History,
            Screen::Commit(_) => ViewMode::Commit,
            Screen::Blob(_) => ViewMode::Blob,
        }
    }
}

/// Action to take after handling an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Redraw,
    Quit,
}

/// Main application ViewModel: the current screen plus the screens it was
/// opened from.
pub struct AppViewModel {
    registry: RepoRegistry,
    current: Screen,
    previous: Vec<Screen>,
    status: Option<String>,
}

impl AppViewModel {
    /// Start at the repository list
    pub fn new(registry: RepoRegistry) -> Self {
        let list = RepoListViewModel::load(&registry);
        Self {
            registry,
            current: Screen::RepoList(list),
            previous: Vec::new(),
            status: None,
        }
    }

    /// A single registered repository opens straight into its tree at
    /// `ref_id` and `path`; several start at the repository list.
    pub fn start(registry: RepoRegistry, ref_id: Option<&str>, path: &str) -> Result<Self> {
        let single = match registry.len() {
            1 => registry.names().next().map(str::to_string),
            _ => None,
        };
        match single {
            Some(name) => Self::open_repo(registry, &name, ref_id, path),
            None => Ok(Self::new(registry)),
        }
    }

    /// Start inside the registered repository `name`
    pub fn open_repo(registry: RepoRegistry, name: &str, ref_id: Option<&str>, path: &str) -> Result<Self> {
        let repo = Rc::new(registry.open(name)?);
        Self::browse(registry, repo, ref_id, path)
    }

    /// Start inside an already opened repository
    pub fn browse(registry: RepoRegistry, repo: Rc<Repository>, ref_id: Option<&str>, path: &str) -> Result<Self> {
        let ctx = RequestContext::new(repo, ref_id, path)?;
        let (tree, file) = open_location(ctx)?;
        let mut app = Self {
            registry,
            current: Screen::Tree(tree),
            previous: Vec::new(),
            status: None,
        };
        app.push_all(file.map(Screen::Blob));
        Ok(app)
    }

    pub fn screen(&self) -> &Screen {
        &self.current
    }

    pub fn view_mode(&self) -> ViewMode {
        self.current.view_mode()
    }

    /// Message of the last failed action
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn can_go_back(&self) -> bool {
        !self.previous.is_empty() || matches!(&self.current, Screen::Tree(tree) if !tree.is_at_root())
    }

    fn push_all(&mut self, screens: impl IntoIterator<Item = Screen>) {
        for screen in screens {
            let old = std::mem::replace(&mut self.current, screen);
            self.previous.push(old);
        }
    }

    fn pop(&mut self) -> bool {
        match self.previous.pop() {
            Some(screen) => {
                self.current = screen;
                true
            }
            None => false,
        }
    }

    /// Handle a user intent and return the action to take.
    ///
    /// Failures are logged and kept as the status message; the current
    /// screen stays as it was.
    pub fn handle_intent(&mut self, intent: Intent) -> Action {
        if intent == Intent::Quit {
            return Action::Quit;
        }
        match self.apply(intent) {
            Ok(()) => self.status = None,
            Err(e) => {
                warn!(?intent, error = %e, "action failed");
                self.status = Some(e.to_string());
            }
        }
        Action::Redraw
    }

    fn apply(&mut self, intent: Intent) -> Result<()> {
        match intent {
            Intent::Back => {
                if let Screen::Tree(tree) = &mut self.current {
                    if tree.go_back()? {
                        return Ok(());
                    }
                }
                self.pop();
                return Ok(());
            }
            Intent::MoveUp | Intent::MoveDown => {
                let up = intent == Intent::MoveUp;
                match &mut self.current {
                    Screen::Blob(blob) if up => blob.scroll_up(1),
                    Screen::Blob(blob) => blob.scroll_down(1),
                    Screen::Commit(commit) if up => commit.scroll_up(1),
                    Screen::Commit(commit) => commit.scroll_down(1),
                    Screen::RepoList(list) => step(list, up),
                    Screen::Tree(tree) => step(tree, up),
                    Screen::History(history) => step(history, up),
                }
                return Ok(());
            }
            _ => {}
        }

        let opened: Vec<Screen> = match (&mut self.current, intent) {
            (Screen::RepoList(list), Intent::ToggleRepoOrder) => {
                list.toggle_order();
                Vec::new()
            }
            (Screen::RepoList(list), Intent::Enter) => match list.selected_name() {
                Some(name) => {
                    debug!(repo = name, "opening repository from list");
                    let repo = Rc::new(self.registry.open(name)?);
                    location_screens(RequestContext::new(repo, None, "")?)?
                }
                None => Vec::new(),
            },
            (Screen::Tree(tree), Intent::Enter) => match tree.enter_selected()? {
                Some(file) => vec![Screen::Blob(BlobViewModel::new(file)?)],
                None => Vec::new(),
            },
            (Screen::Tree(tree), Intent::NextBranch) => {
                tree.next_branch()?;
                Vec::new()
            }
            (Screen::Tree(tree), Intent::ShowHistory) => {
                vec![Screen::History(HistoryViewModel::new(tree.context().clone())?)]
            }
            (Screen::Blob(blob), Intent::ShowHistory) => {
                vec![Screen::History(HistoryViewModel::new(blob.context().clone())?)]
            }
            (Screen::History(history), Intent::NextPage) => {
                history.next_page()?;
                Vec::new()
            }
            (Screen::History(history), Intent::PrevPage) => {
                history.prev_page()?;
                Vec::new()
            }
            (Screen::History(history), Intent::Enter) => match history.selected_context() {
                Some(ctx) => vec![Screen::Commit(CommitViewModel::new(ctx?))],
                None => Vec::new(),
            },
            (Screen::Commit(commit), Intent::Enter) => location_screens(commit.context().clone())?,
            (Screen::Commit(commit), Intent::NextPage) => {
                commit.scroll_down(SCROLL_PAGE);
                Vec::new()
            }
            (Screen::Commit(commit), Intent::PrevPage) => {
                commit.scroll_up(SCROLL_PAGE);
                Vec::new()
            }
            (Screen::Blob(blob), Intent::NextPage) => {
                blob.scroll_down(SCROLL_PAGE);
                Vec::new()
            }
            (Screen::Blob(blob), Intent::PrevPage) => {
                blob.scroll_up(SCROLL_PAGE);
                Vec::new()
            }
            _ => Vec::new(),
        };

        self.push_all(opened);
        Ok(())
    }
}

fn step(list: &mut impl Selectable, up: bool) {
    if up {
        list.move_up();
    } else {
        list.move_down();
    }
}

/// The directory screen for a context, plus the file screen when the
/// context names a file
fn open_location(ctx: RequestContext) -> Result<(TreeViewModel, Option<BlobViewModel>)> {
    let tree = TreeViewModel::new(ctx.clone())?;
    let file = if tree.context().path() != ctx.path() {
        Some(BlobViewModel::new(ctx)?)
    } else {
        None
    };
    Ok((tree, file))
}

fn location_screens(ctx: RequestContext) -> Result<Vec<Screen>> {
    let (tree, file) = open_location(ctx)?;
    Ok(std::iter::once(Screen::Tree(tree))
        .chain(file.map(Screen::Blob))
        .collect())
}
