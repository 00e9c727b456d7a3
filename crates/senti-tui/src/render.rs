//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame` and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::truncate_with_ellipsis;
use crate::features::result;
use crate::input;
use crate::state::AppState;

pub const TITLE: &str = "Sentiment Analyzer";
pub const INPUT_LABEL: &str = "Enter text to analyze:";
pub const SUBMIT_LABEL: &str = "Analyze Sentiment";
pub const LOADING_LABEL: &str = "Analyzing...";

/// Horizontal padding on each side of the form.
const MARGIN: u16 = 1;

/// Spinner frames shown in the submit button while loading.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

const KEY_HINTS: &str = "Enter analyze · Shift+Enter newline · Ctrl+C clear · Esc quit";

/// Renders the whole form.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let content = Rect {
        x: area.x + MARGIN,
        width: area.width.saturating_sub(MARGIN * 2),
        ..area
    };

    let input_height = input::calculate_input_height(&app.input, content.width, area.height);
    let panel_height = result::panel_height(app.form.status(), content.width);

    let [title, label, textarea, button, panel, _, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(input_height),
        Constraint::Length(2),
        Constraint::Length(panel_height),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(content);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        title,
    );
    frame.render_widget(Paragraph::new(INPUT_LABEL), label);

    input::render_input(&app.input, frame, textarea);
    render_button(app, frame, button);
    result::render_panel(app.form.status(), frame, panel);
    render_footer(app, frame, footer);
}

/// Renders the submit trigger. It is dimmed whenever submitting would not
/// start a request.
fn render_button(app: &AppState, frame: &mut Frame, area: Rect) {
    let label = if app.form.is_loading() {
        let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
        format!("[ {spinner} {LOADING_LABEL} ]")
    } else {
        format!("[ {SUBMIT_LABEL} ]")
    };

    let style = if app.form.can_submit() {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };

    frame.render_widget(Paragraph::new(Line::from(Span::styled(label, style))), area);
}

fn render_footer(app: &AppState, frame: &mut Frame, area: Rect) {
    let width = area.width as usize;
    let endpoint = format!("→ {}", app.endpoint);
    let hints_width = KEY_HINTS.chars().count();

    let style = Style::default().fg(Color::DarkGray);
    let line = if hints_width + 3 + endpoint.chars().count() <= width {
        let gap = width - hints_width - endpoint.chars().count();
        Line::from(vec![
            Span::styled(KEY_HINTS, style),
            Span::raw(" ".repeat(gap)),
            Span::styled(endpoint, style),
        ])
    } else {
        Line::from(Span::styled(truncate_with_ellipsis(KEY_HINTS, width), style))
    };

    frame.render_widget(Paragraph::new(line), area);
}
