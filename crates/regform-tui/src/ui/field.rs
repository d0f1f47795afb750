//! Form field
//!
//! Displays one bordered text input with its validation error underneath.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};
use regform_app::{FieldId, Focus};

use crate::App;

const MASK: char = '•';
const INPUT_HEIGHT: u16 = 3;
const TEXT_OFFSET: u16 = 1; // inside left and top border
const RIGHT_PADDING: u16 = 1; // inside right border

/// Render a field and its error line.
pub fn render(frame: &mut Frame, app: &App, field: FieldId, area: Rect) {
    let focused = app.focus() == Focus::Field(field);
    let error = app.form().error(field);
    let value = app.form().value(field);

    let border_style = match (focused, error) {
        (true, _) => Style::default().fg(Color::Yellow),
        (false, Some(_)) => Style::default().fg(Color::Red),
        (false, None) => Style::default().fg(Color::Gray),
    };
    let block =
        Block::default().borders(Borders::ALL).border_style(border_style).title(field.label());

    let text = if value.is_empty() && !focused {
        Span::styled(placeholder(field), Style::default().fg(Color::DarkGray))
    } else if field.is_secret() {
        Span::raw(MASK.to_string().repeat(value.chars().count()))
    } else {
        Span::raw(value.to_owned())
    };

    let input_area = Rect { height: area.height.min(INPUT_HEIGHT), ..area };
    frame.render_widget(Paragraph::new(text).block(block), input_area);

    if let Some(message) = error
        && area.height > INPUT_HEIGHT
    {
        let error_area = Rect {
            x: area.x.saturating_add(TEXT_OFFSET),
            y: area.y.saturating_add(INPUT_HEIGHT),
            width: area.width.saturating_sub(TEXT_OFFSET),
            height: 1,
        };
        let line =
            Span::styled(message, Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC));
        frame.render_widget(Paragraph::new(line), error_area);
    }

    if focused {
        let available_width = area.width.saturating_sub(TEXT_OFFSET + RIGHT_PADDING + 1);
        let cursor_offset = (app.cursor(field) as u16).min(available_width);
        let cursor_x = area.x.saturating_add(TEXT_OFFSET).saturating_add(cursor_offset);
        let cursor_y = area.y.saturating_add(TEXT_OFFSET);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn placeholder(field: FieldId) -> &'static str {
    match field {
        FieldId::Email => "you@example.com",
        FieldId::Password => "choose a password",
        FieldId::RepeatPassword => "type it again",
    }
}
