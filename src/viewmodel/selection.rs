/// Navigable list with a single selected row
pub trait Selectable {
    fn len(&self) -> usize;

    fn selected(&self) -> usize;

    fn set_selected(&mut self, index: usize);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move selection up with wraparound
    fn move_up(&mut self) {
        let len = self.len();
        if len == 0 {
            self.set_selected(0);
            return;
        }
        let selected = self.selected();
        self.set_selected(if selected == 0 { len - 1 } else { selected - 1 });
    }

    /// Move selection down with wraparound
    fn move_down(&mut self) {
        let len = self.len();
        if len == 0 {
            self.set_selected(0);
            return;
        }
        let selected = self.selected();
        self.set_selected(if selected + 1 >= len { 0 } else { selected + 1 });
    }

    /// Pull the selection back inside the list after its contents changed
    fn clamp_selection(&mut self) {
        let last = self.len().saturating_sub(1);
        if self.selected() > last {
            self.set_selected(last);
        }
    }
}
