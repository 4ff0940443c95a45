use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const TABLE_HINTS: &str = " ↑/↓: Select │ e: Edit │ d: Delete │ r: Refresh │ q: Quit";
const FORM_HINTS: &str = " Tab/↑/↓: Field │ Enter: Save │ Esc: Cancel";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints on the left, the last success notice (if any) and the
    /// version on the right.
    pub fn widget(&self, area: Rect, form_open: bool, notice: Option<&str>) -> Paragraph<'static> {
        let hints = if form_open { FORM_HINTS } else { TABLE_HINTS };
        let notice = notice.map(|n| format!("✔ {}  ", n)).unwrap_or_default();
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let used = hints.chars().count() + notice.chars().count() + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width.saturating_sub(used);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(notice, Style::default().fg(STATUS_OK)),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
