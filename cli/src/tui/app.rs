use ratatui::widgets::TableState;
use tickli_core::{Filter, Task, TaskListService, TaskStore};

pub enum InputMode {
    Normal,
    Adding,
}

/// TUI state: the service plus the draft buffer and row selection.
///
/// `rows` is the rendered snapshot of `visible_tasks()`, refreshed after
/// every mutation or filter change.
pub struct App<S: TaskStore> {
    pub service: TaskListService<S>,
    pub rows: Vec<Task>,
    pub state: TableState,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
}

impl<S: TaskStore> App<S> {
    pub fn new(service: TaskListService<S>) -> App<S> {
        let rows: Vec<Task> = service.visible_tasks().into_iter().cloned().collect();
        let mut state = TableState::default();
        if !rows.is_empty() {
            state.select(Some(0));
        }
        App {
            service,
            rows,
            state,
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
        }
    }

    pub fn next(&mut self) {
        if self.rows.is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.rows.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.rows.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn toggle_selected(&mut self) {
        if let Some(i) = self.state.selected() {
            if let Some(task) = self.rows.get(i) {
                let id = task.id;
                self.service.toggle_task(&id);
            }
            // Under Active/Completed the row may leave the view
            self.reload_rows();
            self.clamp_selection(i);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(i) = self.state.selected() {
            if let Some(task) = self.rows.get(i) {
                let id = task.id;
                self.service.delete_task(&id);
            }
            self.reload_rows();
            self.clamp_selection(i);
        }
    }

    pub fn clear_completed(&mut self) {
        // The control is only offered while completed tasks exist
        if self.service.completed_count() == 0 {
            return;
        }
        let i = self.state.selected().unwrap_or(0);
        self.service.clear_completed();
        self.reload_rows();
        self.clamp_selection(i);
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.service.set_filter(filter);
        self.reload_rows();
        if self.rows.is_empty() {
            self.state.select(None);
        } else {
            self.state.select(Some(0));
        }
    }

    pub fn enter_add_mode(&mut self) {
        self.input_mode = InputMode::Adding;
        self.input.clear();
        self.cursor_position = 0;
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self
            .input
            .chars()
            .take(self.cursor_position)
            .map(|c| c.len_utf8())
            .sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self
                .input
                .chars()
                .take(self.cursor_position - 1)
                .map(|c| c.len_utf8())
                .sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Submits the draft. A blank draft is a no-op, mirroring a disabled
    /// submit control.
    pub fn submit_draft(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }

        if self.service.add_task(&self.input).is_some() {
            self.input.clear();
            self.cursor_position = 0;
            self.exit_input_mode();
            self.reload_rows();
            if !self.rows.is_empty() {
                self.state.select(Some(0));
            }
        }
    }

    fn reload_rows(&mut self) {
        self.rows = self.service.visible_tasks().into_iter().cloned().collect();
    }

    fn clamp_selection(&mut self, previous: usize) {
        if self.rows.is_empty() {
            self.state.select(None);
        } else if previous >= self.rows.len() {
            self.state.select(Some(self.rows.len() - 1));
        } else {
            self.state.select(Some(previous));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickli_core::MemoryTaskStore;

    fn app() -> App<MemoryTaskStore> {
        App::new(TaskListService::new(MemoryTaskStore::new()))
    }

    fn type_text(app: &mut App<MemoryTaskStore>, text: &str) {
        for c in text.chars() {
            app.input_char(c);
        }
    }

    #[test]
    fn test_submit_draft_adds_and_resets_input() {
        let mut app = app();
        app.enter_add_mode();
        type_text(&mut app, "  Buy milk  ");
        app.submit_draft();

        assert_eq!(app.rows.len(), 1);
        assert_eq!(app.rows[0].text, "Buy milk");
        assert_eq!(app.input, "");
        assert_eq!(app.cursor_position, 0);
        assert!(matches!(app.input_mode, InputMode::Normal));
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn test_submit_blank_draft_stays_in_add_mode() {
        let mut app = app();
        app.enter_add_mode();
        type_text(&mut app, "   ");
        app.submit_draft();

        assert!(app.rows.is_empty());
        assert!(matches!(app.input_mode, InputMode::Adding));
    }

    #[test]
    fn test_delete_clamps_selection_to_last_row() {
        let mut app = app();
        app.enter_add_mode();
        type_text(&mut app, "one");
        app.submit_draft();
        app.enter_add_mode();
        type_text(&mut app, "two");
        app.submit_draft();

        app.next();
        app.delete_selected();

        assert_eq!(app.rows.len(), 1);
        assert_eq!(app.state.selected(), Some(0));

        app.delete_selected();
        assert!(app.rows.is_empty());
        assert_eq!(app.state.selected(), None);
    }

    #[test]
    fn test_toggle_under_active_filter_drops_row_from_view() {
        let mut app = app();
        app.enter_add_mode();
        type_text(&mut app, "one");
        app.submit_draft();
        app.enter_add_mode();
        type_text(&mut app, "two");
        app.submit_draft();

        app.set_filter(Filter::Active);
        app.toggle_selected();

        assert_eq!(app.rows.len(), 1);
        assert_eq!(app.rows[0].text, "one");
        assert_eq!(app.state.selected(), Some(0));
        assert_eq!(app.service.completed_count(), 1);
    }

    #[test]
    fn test_clear_completed_without_completed_is_noop() {
        let mut app = app();
        app.enter_add_mode();
        type_text(&mut app, "one");
        app.submit_draft();

        app.clear_completed();
        assert_eq!(app.rows.len(), 1);
    }

    #[test]
    fn test_cursor_editing_handles_wide_chars() {
        let mut app = app();
        app.enter_add_mode();
        type_text(&mut app, "牛乳を買う");
        app.move_cursor_left();
        app.delete_char();

        assert_eq!(app.input, "牛乳をう");
        assert_eq!(app.cursor_position, 3);
    }
}
