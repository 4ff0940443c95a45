use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::{render_form_dialog, FormKind};
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::products::ProductsState;
use crate::ui::table::render_listing;

/// Draw one frame of the product view.
///
/// Each open form is drawn over the listing; if both flags are set the edit
/// form ends up on top.
pub fn draw(frame: &mut Frame, state: &ProductsState, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.base_url()), header);
    frame.render_widget(Clear, body);
    render_listing(frame, body, state, app);
    frame.render_widget(
        Footer::new().widget(footer, state.is_modal_open(), state.notice.as_deref()),
        footer,
    );

    if state.show_add_modal {
        render_form_dialog(frame, body, FormKind::Add, &state.draft, app.focused_field());
    }
    if state.show_edit_modal {
        render_form_dialog(frame, body, FormKind::Edit, &state.draft, app.focused_field());
    }
}
