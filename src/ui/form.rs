//! Add/edit product dialogs bound to the form draft.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::model::{DraftField, ProductDraft};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_BLUE, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER, STATUS_OK,
};

const DIALOG_WIDTH: u16 = 52;
const LABEL_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Add,
    Edit,
}

impl FormKind {
    pub fn title(self) -> &'static str {
        match self {
            FormKind::Add => "Add New Product",
            FormKind::Edit => "Edit Product",
        }
    }

    /// (cancel, save) button captions.
    pub fn buttons(self) -> (&'static str, &'static str) {
        match self {
            FormKind::Add => ("Close", "Save Product"),
            FormKind::Edit => ("Cancel", "Update Product"),
        }
    }
}

pub fn form_lines(
    kind: FormKind,
    draft: &ProductDraft,
    focused: DraftField,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];

    for field in DraftField::ALL {
        let is_focused = field == focused;
        let marker = if is_focused { "▸ " } else { "  " };
        let cursor = if is_focused { "▏" } else { "" };
        let value_style = if is_focused {
            Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
        } else {
            Style::default().fg(HEADER_TEXT)
        };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(BRAND_BLUE)),
            Span::styled(
                format!("{:<width$}", field.label(), width = LABEL_WIDTH),
                Style::default().fg(HEADER_SEPARATOR),
            ),
            Span::styled(format!("{}{}", draft.field(field), cursor), value_style),
        ]));
        lines.push(Line::from(""));
    }

    let (cancel, save) = kind.buttons();
    let save_color = match kind {
        FormKind::Add => STATUS_OK,
        FormKind::Edit => BRAND_BLUE,
    };
    let buttons = Line::from(vec![
        Span::styled(format!("[Esc] {}", cancel), Style::default().fg(HEADER_SEPARATOR)),
        Span::raw("    "),
        Span::styled(
            format!("[Enter] {}", save),
            Style::default().fg(save_color).add_modifier(Modifier::BOLD),
        ),
    ]);
    lines.push(buttons.alignment(Alignment::Right));

    lines
}

pub fn render_form_dialog(
    frame: &mut Frame,
    area: Rect,
    kind: FormKind,
    draft: &ProductDraft,
    focused: DraftField,
) {
    let lines = form_lines(kind, draft, focused);
    let height = lines.len().saturating_add(2) as u16;
    let dialog = centered_rect_by_size(area, DIALOG_WIDTH, height);

    frame.render_widget(Clear, dialog);
    let block = Block::default()
        .title(format!(" {} ", kind.title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), dialog);
}
