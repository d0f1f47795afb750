//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod field;
mod status;
mod submit;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
};
use regform_app::FieldId;

use crate::App;

/// Width of the form box, borders included.
const FORM_WIDTH: u16 = 48;
/// Rows per field: bordered input (3) plus error line (1).
const FIELD_HEIGHT: u16 = 4;
/// Rows of the bordered submit button.
const SUBMIT_HEIGHT: u16 = 3;
/// Rows of the outer form border.
const BORDER_SIZE: u16 = 2;
const STATUS_HEIGHT: u16 = 1;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(FIELD_HEIGHT), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    let [main_area, status_area] = chunks.as_ref() else {
        return;
    };

    let form_height = FIELD_HEIGHT * FieldId::ALL.len() as u16 + SUBMIT_HEIGHT + BORDER_SIZE;
    render_form(frame, app, centered(*main_area, FORM_WIDTH, form_height));
    status::render(frame, app, *status_area);
}

/// Render the bordered form (three fields and the submit button).
fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Registration ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(SUBMIT_HEIGHT),
        ])
        .split(inner);

    let [email_area, password_area, repeat_area, submit_area] = chunks.as_ref() else {
        return;
    };

    field::render(frame, app, FieldId::Email, *email_area);
    field::render(frame, app, FieldId::Password, *password_area);
    field::render(frame, app, FieldId::RepeatPassword, *repeat_area);
    submit::render(frame, app, *submit_area);
}

/// Rect of at most `width` x `height`, centered in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x.saturating_add((area.width - width) / 2),
        y: area.y.saturating_add((area.height - height) / 2),
        width,
        height,
    }
}
