//! Product listing: loading spinner, table, or the empty-state row.

use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::model::Product;
use crate::ui::app::App;
use crate::ui::products::ProductsState;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BRAND_BLUE, GLOBAL_BORDER, HEADER_TEXT, TABLE_HEADER_BG};

/// Spinner animation frames.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const EMPTY_MESSAGE: &str = "No products found";
pub const LOADING_MESSAGE: &str = "Loading products...";
pub const COLUMNS: [&str; 5] = ["#", "Name", "Price ($)", "Quantity", "Actions"];

const ACTION_HINTS: &str = "✏️ e  🗑️ d";

/// One rendered table line, in collection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    /// 1-based position in the listing.
    pub index: usize,
    pub name: String,
    pub price: String,
    pub quantity: String,
}

pub fn product_rows(products: &[Product]) -> Vec<ProductRow> {
    products
        .iter()
        .enumerate()
        .map(|(idx, product)| ProductRow {
            index: idx + 1,
            name: product.name.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
        })
        .collect()
}

pub fn render_listing(frame: &mut Frame, area: Rect, state: &ProductsState, app: &App) {
    if state.loading {
        render_spinner(frame, area, app.spinner_tick());
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let header = Row::new(COLUMNS).style(
        Style::default()
            .fg(HEADER_TEXT)
            .bg(TABLE_HEADER_BG)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = if state.products.is_empty() {
        vec![Row::new(vec![Cell::from(""), Cell::from(EMPTY_MESSAGE)])]
    } else {
        product_rows(&state.products)
            .into_iter()
            .map(|row| {
                let selected = row.index - 1 == app.selected();
                let actions = if selected { ACTION_HINTS } else { "" };
                let style = if selected {
                    Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
                } else {
                    Style::default().fg(HEADER_TEXT)
                };
                Row::new(vec![
                    Cell::from(row.index.to_string()),
                    Cell::from(row.name),
                    Cell::from(row.price),
                    Cell::from(row.quantity),
                    Cell::from(actions),
                ])
                .style(style)
            })
            .collect()
    };

    let widths = [
        Constraint::Length(4),
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(14),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);
    frame.render_widget(table, area);
}

fn render_spinner(frame: &mut Frame, area: Rect, tick: u8) {
    let spinner = SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()];
    let top_padding = area.height.saturating_sub(1) / 2;

    let mut lines = vec![Line::from(""); top_padding as usize];
    lines.push(Line::from(vec![
        Span::styled(format!("{} ", spinner), Style::default().fg(BRAND_BLUE)),
        Span::styled(LOADING_MESSAGE, Style::default().fg(HEADER_TEXT)),
    ]));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
