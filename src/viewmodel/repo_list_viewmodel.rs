use crate::browse::{list_repositories, sort_summaries, RepoOrder, RepoSummary};
use crate::repository::RepoRegistry;

use super::selection::Selectable;

/// ViewModel for the repository index
pub struct RepoListViewModel {
    summaries: Vec<RepoSummary>,
    order: RepoOrder,
    selected_index: usize,
}

impl RepoListViewModel {
    pub fn new(summaries: Vec<RepoSummary>, order: RepoOrder) -> Self {
        let mut summaries = summaries;
        sort_summaries(&mut summaries, order);
        Self {
            summaries,
            order,
            selected_index: 0,
        }
    }

    /// Summarize every registered repository
    pub fn load(registry: &RepoRegistry) -> Self {
        let order = RepoOrder::default();
        Self::new(list_repositories(registry, order), order)
    }

    pub fn summaries(&self) -> &[RepoSummary] {
        &self.summaries
    }

    pub fn order(&self) -> RepoOrder {
        self.order
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Switch between name and last-update order, keeping the selected repo
    pub fn toggle_order(&mut self) {
        let selected = self.selected_name().map(str::to_string);
        self.order = self.order.toggled();
        sort_summaries(&mut self.summaries, self.order);
        self.selected_index = selected
            .and_then(|name| self.summaries.iter().position(|s| s.name == name))
            .unwrap_or(0);
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.summaries
            .get(self.selected_index)
            .map(|s| s.name.as_str())
    }
}

impl Selectable for RepoListViewModel {
    fn len(&self) -> usize {
        self.summaries.len()
    }

    fn selected(&self) -> usize {
        self.selected_index
    }

    fn set_selected(&mut self, index: usize) {
        self.selected_index = index;
    }
}
