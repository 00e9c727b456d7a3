//! Outcome panels: the error panel and the analysis result panel.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use senti_core::form::FormStatus;
use senti_core::sentiment::{Analysis, Polarity};
use unicode_width::UnicodeWidthStr;

/// Rows needed to show the panel for `status` at the given width.
pub fn panel_height(status: &FormStatus, width: u16) -> u16 {
    match status {
        FormStatus::Idle | FormStatus::Loading => 0,
        FormStatus::Success(_) => 4,
        FormStatus::Failure(message) => {
            let inner = width.saturating_sub(2).max(1) as usize;
            let rows: usize = message.lines().map(|line| wrapped_rows(line, inner)).sum();
            rows.max(1) as u16 + 2
        }
    }
}

/// Rows a word-wrapped line occupies, matching `Wrap { trim: true }`.
///
/// Words wider than the panel are hard-broken across rows.
fn wrapped_rows(line: &str, width: usize) -> usize {
    let mut rows = 1;
    let mut used = 0;

    for word in line.split_whitespace() {
        let word_width = word.width();
        let needed = if used == 0 {
            word_width
        } else {
            used + 1 + word_width
        };
        if needed <= width {
            used = needed;
            continue;
        }

        if used > 0 {
            rows += 1;
        }
        let overflow_rows = word_width.div_ceil(width).max(1) - 1;
        rows += overflow_rows;
        used = word_width - overflow_rows * width;
    }

    rows
}

/// Renders the panel for terminal states. Idle and Loading draw nothing.
pub fn render_panel(status: &FormStatus, frame: &mut Frame, area: Rect) {
    match status {
        FormStatus::Idle | FormStatus::Loading => {}
        FormStatus::Success(analysis) => render_success(analysis, frame, area),
        FormStatus::Failure(message) => render_error(message, frame, area),
    }
}

fn render_error(message: &str, frame: &mut Frame, area: Rect) {
    let style = Style::default().fg(Color::Red);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(Span::styled(" Error ", style.add_modifier(Modifier::BOLD)));

    let paragraph = Paragraph::new(Line::from(Span::styled(message.to_string(), style)))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_success(analysis: &Analysis, frame: &mut Frame, area: Rect) {
    let style = Style::default().fg(Color::Green);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(Span::styled(
            " Analysis Result ",
            style.add_modifier(Modifier::BOLD),
        ));

    let key_style = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(vec![
            Span::styled("Label: ", key_style),
            Span::styled(analysis.label.clone(), label_style(analysis.polarity())),
        ]),
        Line::from(vec![
            Span::styled("Confidence: ", key_style),
            Span::raw(analysis.confidence_percent()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn label_style(polarity: Option<Polarity>) -> Style {
    let color = match polarity {
        Some(Polarity::Positive) => Color::Green,
        Some(Polarity::Negative) => Color::Red,
        Some(Polarity::Neutral) => Color::Yellow,
        None => Color::Reset,
    };
    Style::default().fg(color)
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    #[test]
    fn test_panel_height_by_status() {
        assert_eq!(panel_height(&FormStatus::Idle, 40), 0);
        assert_eq!(panel_height(&FormStatus::Loading, 40), 0);
        let analysis = Analysis {
            label: "positive".to_string(),
            confidence: 0.9,
        };
        assert_eq!(panel_height(&FormStatus::Success(analysis), 40), 4);
    }

    #[test]
    fn test_error_panel_grows_with_message() {
        let short = FormStatus::Failure("HTTP error! status: 500".to_string());
        assert_eq!(panel_height(&short, 40), 3);

        let long = FormStatus::Failure("x".repeat(100));
        assert_eq!(panel_height(&long, 22), 7);
    }

    #[test]
    fn test_error_panel_height_follows_word_breaks() {
        // 20 chars fit two rows by count, but word wrap needs three.
        let status = FormStatus::Failure("aaaaaa bbbbbb cccccc".to_string());
        assert_eq!(panel_height(&status, 12), 5);
    }

    #[test]
    fn test_error_panel_height_uses_display_width() {
        let status = FormStatus::Failure("界界界界界 界界界界界".to_string());
        assert_eq!(panel_height(&status, 12), 4);
    }

    #[test]
    fn test_error_panel_shows_whole_message() {
        let status = FormStatus::Failure("aaaaaa bbbbbb cccccc".to_string());
        let width = 12;
        let height = panel_height(&status, width);

        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render_panel(&status, frame, frame.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..height {
            for x in 0..width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        assert!(text.contains("aaaaaa"));
        assert!(text.contains("bbbbbb"));
        assert!(text.contains("cccccc"));
    }

    #[test]
    fn test_label_colour_follows_polarity() {
        assert_eq!(label_style(Some(Polarity::Negative)).fg, Some(Color::Red));
        assert_eq!(label_style(None).fg, Some(Color::Reset));
    }
}
