use crate::ui::theme::{GLOBAL_BORDER, SUBTITLE, TITLE};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE_TEXT: &str = "Find Your Calm";
pub const SUBTITLE_TEXT: &str = "Take a moment to breathe and relax";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let lines = vec![
            Line::from(Span::styled(
                TITLE_TEXT,
                Style::default().fg(TITLE).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(SUBTITLE_TEXT, Style::default().fg(SUBTITLE))),
        ];

        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
