//! # TitleBar Component
//!
//! Top status bar: page title, status text and a spinner while a request
//! is in flight.
//!
//! Stateless: every field is a prop supplied by `ui::draw_ui` each frame.
//!
//! ```text
//! Dine | Restaurants | 20 restaurants
//! Dine | Kafe Kita | ⠹ Submitting review...
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct TitleBar<'a> {
    pub page_title: &'a str,
    pub status_message: &'a str,
    pub is_busy: bool,
    pub spinner_frame: usize,
}

impl TitleBar<'_> {
    pub fn text(&self) -> String {
        let mut text = format!("Dine | {}", self.page_title);
        if self.is_busy || !self.status_message.is_empty() {
            text.push_str(" | ");
        }
        if self.is_busy {
            text.push(SPINNER[self.spinner_frame % SPINNER.len()]);
            text.push(' ');
        }
        text.push_str(self.status_message);
        text
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
