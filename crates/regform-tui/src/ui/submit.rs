//! Submit button

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use regform_app::Focus;

use crate::App;

const BUTTON_WIDTH: u16 = 14;

/// Render the submit button.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let enabled = app.submit_enabled();
    let focused = app.focus() == Focus::Submit;

    let style = match (enabled, focused) {
        (true, true) => {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        },
        (true, false) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        (false, _) => Style::default().fg(Color::DarkGray),
    };

    let width = BUTTON_WIDTH.min(area.width);
    let button_area = Rect { x: area.x.saturating_add((area.width - width) / 2), width, ..area };

    let button = Paragraph::new("Register")
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));

    frame.render_widget(button, button_area);
}
