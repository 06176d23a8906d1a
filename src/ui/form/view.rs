//! Rendering for the summarization form.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, PLACEHOLDER,
    STATUS_ERROR, STATUS_OK,
};

use super::field::TextField;
use super::state::{FormFocus, FormState};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const PASSAGE_LABEL: &str = "Enter your text here:";
const PASSAGE_PLACEHOLDER: &str = "Paste text to summarize...";
const REFERENCE_LABEL: &str = "Optional: Enter a reference summary for ROUGE evaluation:";
const REFERENCE_PLACEHOLDER: &str = "Paste reference summary here for ROUGE score...";
const SCROLL_HINT: &str = "PgUp/PgDn: scroll results ";

/// Ten text rows plus borders.
const PASSAGE_HEIGHT: u16 = 12;
/// Five text rows plus borders.
const REFERENCE_HEIGHT: u16 = 7;
/// One text row plus borders.
const FIELD_MIN_HEIGHT: u16 = 3;
/// Two labels, the button row and the error row.
const FIXED_ROWS: u16 = 4;

pub const LOADING_TEXT: &str = "Loading...";

/// Row budget for the resizable parts of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FormHeights {
    passage: u16,
    reference: u16,
    results: u16,
}

impl FormHeights {
    /// Split `total` rows so the results get up to `results_rows` first.
    ///
    /// Both fields keep at least one text row while there is room for it;
    /// what is left after the results is shared 12:7 between passage and
    /// reference, capped at their full heights. Spare rows go to the results.
    fn fit(total: u16, results_rows: u16) -> Self {
        let spare = total.saturating_sub(FIXED_ROWS);
        let min_fields = (FIELD_MIN_HEIGHT * 2).min(spare);
        let results = results_rows.min(spare - min_fields);
        let fields = spare - results;

        let full = PASSAGE_HEIGHT + REFERENCE_HEIGHT;
        let passage = (fields.min(full) * PASSAGE_HEIGHT / full)
            .max(fields.min(FIELD_MIN_HEIGHT))
            .min(PASSAGE_HEIGHT);
        let reference = (fields - passage).min(REFERENCE_HEIGHT);

        Self {
            passage,
            reference,
            results: spare - passage - reference,
        }
    }
}

/// Scroll position of the result pane.
///
/// The pane size is only known while drawing, so `render_form` refreshes the
/// bounds every frame and the offset is clamped to them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultsViewport {
    offset: u16,
    height: u16,
    max_offset: u16,
}

impl ResultsViewport {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// True when the results are taller than the pane.
    pub fn can_scroll(&self) -> bool {
        self.max_offset > 0
    }

    /// Scroll down by a page, keeping one row of overlap.
    pub fn scroll_down(&mut self) {
        let step = self.height.saturating_sub(1).max(1);
        self.offset = self.offset.saturating_add(step).min(self.max_offset);
    }

    pub fn scroll_up(&mut self) {
        let step = self.height.saturating_sub(1).max(1);
        self.offset = self.offset.saturating_sub(step);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    fn update(&mut self, height: u16, content_rows: u16) {
        self.height = height;
        self.max_offset = content_rows.saturating_sub(height);
        self.offset = self.offset.min(self.max_offset);
    }
}

/// Render the whole form into `area`.
pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    state: &FormState,
    viewport: &mut ResultsViewport,
) {
    let results = Paragraph::new(result_lines(state)).wrap(Wrap { trim: false });
    let results_rows = u16::try_from(results.line_count(area.width)).unwrap_or(u16::MAX);
    let heights = FormHeights::fit(area.height, results_rows);

    let [passage_label, passage, reference_label, reference, button, status, results_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(heights.passage),
            Constraint::Length(1),
            Constraint::Length(heights.reference),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(heights.results),
        ])
        .areas(area);

    let label_style = Style::default().fg(HEADER_TEXT);
    frame.render_widget(
        Paragraph::new(Span::styled(PASSAGE_LABEL, label_style)),
        passage_label,
    );
    render_field(
        frame,
        passage,
        state.passage(),
        PASSAGE_PLACEHOLDER,
        state.focus() == FormFocus::Passage,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(REFERENCE_LABEL, label_style)),
        reference_label,
    );
    render_field(
        frame,
        reference,
        state.reference(),
        REFERENCE_PLACEHOLDER,
        state.focus() == FormFocus::Reference,
    );

    frame.render_widget(
        Paragraph::new(button_line(state.focus() == FormFocus::Submit)),
        button,
    );

    if let Some(error) = state.error() {
        let line = Line::from(vec![
            Span::styled(" Error: ", Style::default().fg(STATUS_ERROR)),
            Span::styled(error.to_string(), Style::default().fg(HEADER_TEXT)),
        ]);
        frame.render_widget(Paragraph::new(line), status);
    }

    viewport.update(results_area.height, results_rows);
    frame.render_widget(results.scroll((viewport.offset(), 0)), results_area);

    // Shares the button row, so only when it does not cover the button
    if viewport.can_scroll() && button.width >= 56 {
        frame.render_widget(
            Paragraph::new(Span::styled(
                SCROLL_HINT,
                Style::default().fg(PLACEHOLDER).add_modifier(Modifier::DIM),
            ))
            .alignment(Alignment::Right),
            button,
        );
    }
}

/// Lines of the result section: loading indicator, or summary plus scores.
pub fn result_lines(state: &FormState) -> Vec<Line<'static>> {
    if state.is_busy() {
        let spinner = SPINNER_FRAMES[(state.animation_tick() as usize) % SPINNER_FRAMES.len()];
        return vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(format!(" {} ", spinner), Style::default().fg(STATUS_OK)),
                Span::styled(LOADING_TEXT, Style::default().fg(HEADER_TEXT)),
            ]),
        ];
    }

    if !state.shows_results() {
        return Vec::new();
    }

    let heading = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(HEADER_TEXT);

    let mut lines = vec![Line::from(""), Line::from(Span::styled("Summary", heading))];
    lines.extend(
        state
            .summary()
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), text_style))),
    );

    if let Some(scores) = state.scores() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("ROUGE Scores", heading)));
        for (label, value) in scores.rows() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}:", label),
                    text_style.add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {}", value), text_style),
            ]));
        }
    }

    lines
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    field: &TextField,
    placeholder: &'static str,
    focused: bool,
) {
    let border_color = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    if field.is_empty() {
        let mut spans = Vec::new();
        if focused {
            spans.push(cursor_span(" "));
        }
        spans.push(Span::styled(placeholder, Style::default().fg(PLACEHOLDER)));
        let paragraph = Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
        return;
    }

    let (rows, cursor_row) = field_rows(field, focused, inner.width as usize);

    // Keep the cursor row in view
    let scroll = if focused {
        cursor_row.saturating_sub((inner.height as usize).saturating_sub(1))
    } else {
        0
    };

    let paragraph = Paragraph::new(rows)
        .block(block)
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}

/// Field text hard-wrapped at `width` characters, one `Line` per screen row.
///
/// Returns the rows and the index of the row holding the cursor. When
/// focused, the cursor cell is reversed; at the end of a line it is a blank.
fn field_rows(field: &TextField, focused: bool, width: usize) -> (Vec<Line<'static>>, usize) {
    let width = width.max(1);
    let (cursor_line, cursor_col) = field.cursor_position();
    let mut rows = Vec::new();
    let mut cursor_row = 0;

    for (idx, text) in field.text().split('\n').enumerate() {
        let mut cells: Vec<(char, bool)> = text.chars().map(|ch| (ch, false)).collect();
        if focused && idx == cursor_line {
            match cells.get_mut(cursor_col) {
                Some(cell) => cell.1 = true,
                None => cells.push((' ', true)),
            }
            cursor_row = rows.len() + cursor_col / width;
        }

        if cells.is_empty() {
            rows.push(Line::default());
            continue;
        }
        rows.extend(cells.chunks(width).map(cells_line));
    }

    (rows, cursor_row)
}

/// Group consecutive cells with the same cursor flag into spans.
fn cells_line(cells: &[(char, bool)]) -> Line<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_is_cursor = false;

    for &(ch, is_cursor) in cells {
        if is_cursor != run_is_cursor && !run.is_empty() {
            spans.push(run_span(std::mem::take(&mut run), run_is_cursor, text_style));
        }
        run_is_cursor = is_cursor;
        run.push(ch);
    }
    if !run.is_empty() {
        spans.push(run_span(run, run_is_cursor, text_style));
    }

    Line::from(spans)
}

fn run_span(text: String, is_cursor: bool, text_style: Style) -> Span<'static> {
    if is_cursor {
        cursor_span(text)
    } else {
        Span::styled(text, text_style)
    }
}

fn cursor_span(text: impl Into<String>) -> Span<'static> {
    Span::styled(
        text.into(),
        Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::REVERSED),
    )
}

fn button_line(focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };

    Line::from(vec![
        Span::raw(" "),
        Span::styled("[ Summarize ]", style),
        Span::styled(
            "  Ctrl+S",
            Style::default().fg(PLACEHOLDER).add_modifier(Modifier::DIM),
        ),
    ])
}
