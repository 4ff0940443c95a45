//! Blocking yes/no confirmation drawn over the product view.

use async_trait::async_trait;
use ratatui::backend::Backend;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::{Frame, Terminal};

use crate::manager::Confirm;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::confirm_answer;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::products::ProductsState;
use crate::ui::render::draw;
use crate::ui::theme::{HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};

const DIALOG_WIDTH: u16 = 52;

pub fn render_confirm_dialog(frame: &mut Frame, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Style::default().fg(HEADER_TEXT))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[y] Delete",
                Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("[n] Cancel", Style::default().fg(HEADER_SEPARATOR)),
        ]),
    ];
    let area = centered_rect_by_size(frame.area(), DIALOG_WIDTH, 7);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(" Confirm ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(widget, area);
}

/// [`Confirm`] that redraws a snapshot of the view with the question on top
/// and waits for a `y`/`n` key. Other events are ignored until answered; a
/// closed input channel counts as "no".
pub struct TerminalPrompt<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    events: &'a mut EventHandler,
    state: ProductsState,
    app: App,
}

impl<'a, B: Backend> TerminalPrompt<'a, B> {
    pub fn new(
        terminal: &'a mut Terminal<B>,
        events: &'a mut EventHandler,
        state: ProductsState,
        app: App,
    ) -> Self {
        Self {
            terminal,
            events,
            state,
            app,
        }
    }
}

#[async_trait]
impl<'a, B> Confirm for TerminalPrompt<'a, B>
where
    B: Backend + Send,
{
    async fn confirm(&mut self, message: &str) -> bool {
        let Self {
            terminal,
            events,
            state,
            app,
        } = self;

        loop {
            let drawn = terminal
                .draw(|frame| {
                    draw(frame, state, app);
                    render_confirm_dialog(frame, message);
                })
                .is_ok();
            if !drawn {
                tracing::error!("Failed to draw confirmation prompt");
                return false;
            }

            match events.next().await {
                Some(AppEvent::Key(key)) => {
                    if let Some(answer) = confirm_answer(key) {
                        return answer;
                    }
                }
                Some(AppEvent::Tick) => app.on_tick(),
                Some(AppEvent::Resize) => {}
                None => return false,
            }
        }
    }
}
