use crate::ui::theme::{GLOBAL_BORDER, HINT_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const IDLE_HINTS: &str = " Enter: Start │ 1-3/←→: Pattern │ q: Quit";
const ACTIVE_HINTS: &str = " Enter: Stop │ q: Quit";

pub struct Footer {
    active: bool,
}

impl Footer {
    pub fn new(active: bool) -> Self {
        Self { active }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = if self.active { ACTIVE_HINTS } else { IDLE_HINTS };
        let version = format!("v{} ", VERSION);

        // Padding by char count, hints contain multi-byte separators
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HINT_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
