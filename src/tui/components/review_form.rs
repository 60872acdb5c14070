//! # ReviewForm Component
//!
//! Name + review inputs pinned under the detail page, the way the input box
//! sits under a conversation.
//!
//! ## Responsibilities
//!
//! - Capture text for the focused field (typing, paste, backspace)
//! - Move focus between fields (Tab / Shift+Tab), release it (Esc)
//! - Emit `FormEvent::Submit` on Enter; validation happens in the core
//! - Show the inline validation error under the field it belongs to
//!
//! While no field has focus, keystrokes belong to the page (`m`, `Esc`...).

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::review::{ReviewField, ReviewFormError};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Maximum visible lines of the review field before it stops growing.
pub const MAX_REVIEW_LINES: u16 = 4;
/// Borders around each input.
const FIELD_OVERHEAD: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Submit { name: String, review: String },
    /// Focus left the form.
    Blurred,
}

#[derive(Debug, Default)]
pub struct ReviewFormState {
    pub name: String,
    pub review: String,
    pub focus: Option<ReviewField>,
}

impl ReviewFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_focused(&self) -> bool {
        self.focus.is_some()
    }

    pub fn focus(&mut self, field: ReviewField) {
        self.focus = Some(field);
    }

    /// Clears both inputs. Focus is kept so the user can type another review.
    pub fn reset(&mut self) {
        self.name.clear();
        self.review.clear();
    }

    fn focused_buffer(&mut self) -> Option<&mut String> {
        match self.focus? {
            ReviewField::Name => Some(&mut self.name),
            ReviewField::Review => Some(&mut self.review),
        }
    }

    /// Total rows needed to render the form at `width`.
    pub fn calculate_height(&self, width: u16) -> u16 {
        // name field + review field + error/hint line
        (1 + FIELD_OVERHEAD) + (self.review_lines(width) + FIELD_OVERHEAD) + 1
    }

    fn review_lines(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(FIELD_OVERHEAD) as usize;
        if inner == 0 || self.review.is_empty() {
            return 1;
        }
        let lines = textwrap::wrap(&self.review, inner).len() as u16;
        lines.clamp(1, MAX_REVIEW_LINES)
    }
}

impl EventHandler for ReviewFormState {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        let field = self.focus?;
        match event {
            TuiEvent::Tab | TuiEvent::BackTab | TuiEvent::CursorUp | TuiEvent::CursorDown => {
                self.focus = Some(match field {
                    ReviewField::Name => ReviewField::Review,
                    ReviewField::Review => ReviewField::Name,
                });
                None
            }
            TuiEvent::Escape => {
                self.focus = None;
                Some(FormEvent::Blurred)
            }
            TuiEvent::Submit => Some(FormEvent::Submit {
                name: self.name.clone(),
                review: self.review.clone(),
            }),
            TuiEvent::InputChar(c) => {
                // Names are single-line
                if *c == '\n' && field == ReviewField::Name {
                    return None;
                }
                self.focused_buffer()?.push(*c);
                None
            }
            TuiEvent::Paste(text) => {
                let text = if field == ReviewField::Name {
                    text.replace(['\r', '\n'], " ")
                } else {
                    text.replace("\r\n", "\n")
                };
                self.focused_buffer()?.push_str(&text);
                None
            }
            TuiEvent::Backspace => {
                self.focused_buffer()?.pop();
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the form.
pub struct ReviewForm<'a> {
    state: &'a ReviewFormState,
    error: Option<ReviewFormError>,
    is_submitting: bool,
}

impl<'a> ReviewForm<'a> {
    pub fn new(
        state: &'a ReviewFormState,
        error: Option<ReviewFormError>,
        is_submitting: bool,
    ) -> Self {
        Self {
            state,
            error,
            is_submitting,
        }
    }

    fn field_block(&self, title: &'static str, field: ReviewField) -> Block<'static> {
        let focused = self.state.focus == Some(field);
        let errored = self.error.and_then(ReviewFormError::field) == Some(field);
        let color = if errored {
            Color::Red
        } else if focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        Block::bordered()
            .title(title)
            .border_style(Style::default().fg(color))
    }

    fn hint_line(&self) -> Line<'static> {
        if let Some(error) = self.error {
            return Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(Color::Red),
            ));
        }
        let hint = if self.is_submitting {
            "Submitting..."
        } else if self.state.is_focused() {
            "Enter Submit  Tab Switch field  Ctrl+J Newline  Esc Done"
        } else {
            "Tab Write a review"
        };
        Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))
    }
}

impl Component for ReviewForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let review_height = self.state.review_lines(area.width) + FIELD_OVERHEAD;
        let [name_area, review_area, hint_area] = Layout::vertical([
            Constraint::Length(1 + FIELD_OVERHEAD),
            Constraint::Length(review_height),
            Constraint::Length(1),
        ])
        .areas(area);

        let name_text = if self.state.name.is_empty() && self.state.focus != Some(ReviewField::Name) {
            Span::styled("Your name.", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(self.state.name.as_str())
        };
        frame.render_widget(
            Paragraph::new(Line::from(name_text)).block(self.field_block(" Name ", ReviewField::Name)),
            name_area,
        );

        let review_paragraph = if self.state.review.is_empty()
            && self.state.focus != Some(ReviewField::Review)
        {
            Paragraph::new(Span::styled(
                "Type your review here.",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Paragraph::new(self.state.review.as_str()).wrap(Wrap { trim: false })
        };
        // Keep the tail of a long review visible while typing
        let inner_width = review_area.width.saturating_sub(FIELD_OVERHEAD) as usize;
        let total_lines = if inner_width == 0 {
            0
        } else {
            textwrap::wrap(&self.state.review, inner_width).len() as u16
        };
        let scroll = total_lines.saturating_sub(MAX_REVIEW_LINES);
        frame.render_widget(
            review_paragraph
                .scroll((scroll, 0))
                .block(self.field_block(" Review ", ReviewField::Review)),
            review_area,
        );

        frame.render_widget(self.hint_line(), hint_area);
    }
}
