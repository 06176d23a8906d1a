use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::render_form;
use crate::ui::header::Header;
use crate::ui::layout::{inset_horizontal, layout_regions};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(
        header_widget.widget(app.endpoint(), app.form().is_busy()),
        header,
    );
    frame.render_widget(Clear, body);
    let (form, results_view) = app.form_and_results_view();
    render_form(frame, inset_horizontal(body, 1), form, results_view);
    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer), footer);
}
