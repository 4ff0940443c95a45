use crate::model::DraftField;

/// View-only state that never leaves the terminal: quit flag, row selection,
/// focused form field, and spinner frame. Product data lives in
/// [`ProductsState`](crate::ui::products::ProductsState).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    should_quit: bool,
    base_url: String,
    selected: usize,
    focused_field: DraftField,
    spinner_tick: u8,
}

impl App {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            base_url: base_url.into(),
            selected: 0,
            focused_field: DraftField::Name,
            spinner_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn focused_field(&self) -> DraftField {
        self.focused_field
    }

    pub fn spinner_tick(&self) -> u8 {
        self.spinner_tick
    }

    pub fn on_tick(&mut self) {
        self.spinner_tick = self.spinner_tick.wrapping_add(1);
    }

    /// Move the row selection, wrapping at both ends.
    pub fn move_selection(&mut self, direction: i32, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }

        let current = self.selected.min(len - 1);
        self.selected = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    /// Keep the selection inside a collection that may have shrunk.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn focus_field(&mut self, field: DraftField) {
        self.focused_field = field;
    }

    pub fn focus_next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn focus_prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }
}
