use std::time::Duration;

use crate::catalog::{PATTERNS, TIPS};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{circle_rect, layout_regions};
use crate::ui::theme::{
    phase_color, COUNT, PANEL_BORDER, QUOTE_TEXT, SELECTED, SUBTITLE, UNSELECTED,
};
use crate::ui::view::BreathingView;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App, now: Duration) {
    let area = frame.area();
    frame.render_widget(Clear, area);
    let regions = layout_regions(area);
    let view = BreathingView::from_session(app.session(), now);

    frame.render_widget(Header::new().widget(), regions.header);
    draw_quote(frame, app.session().message(), regions.quote);
    draw_breathing(frame, &view, regions.breathing);
    draw_tips(frame, regions.tips);
    frame.render_widget(
        Footer::new(view.active).widget(regions.footer),
        regions.footer,
    );
}

fn draw_quote(frame: &mut Frame<'_>, message: &str, area: Rect) {
    let quote = Paragraph::new(Line::from(Span::styled(
        format!("“{}”", message),
        Style::default()
            .fg(QUOTE_TEXT)
            .add_modifier(Modifier::ITALIC),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().padding(Padding::new(2, 2, 1, 0)));

    frame.render_widget(quote, area);
}

fn draw_breathing(frame: &mut Frame<'_>, view: &BreathingView, area: Rect) {
    let panel = Block::default()
        .title(" Breathing Exercise ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(PANEL_BORDER));
    let inner = panel.inner(area);
    frame.render_widget(panel, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    if let Some(selected) = view.selector {
        frame.render_widget(selector_line(selected), rows[0]);
    }

    draw_circle(frame, view, rows[1]);

    if let Some(count) = view.completed_breaths {
        let line = Line::from(vec![
            Span::styled("Breaths completed: ", Style::default().fg(SUBTITLE)),
            Span::styled(
                count.to_string(),
                Style::default().fg(COUNT).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(line).alignment(Alignment::Center),
            rows[2],
        );
    }

    let action = Line::from(Span::styled(
        format!("[ {} ]", view.action),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(action).alignment(Alignment::Center),
        rows[3],
    );
}

fn selector_line(selected: usize) -> Paragraph<'static> {
    let mut spans = Vec::with_capacity(PATTERNS.len() * 2);
    for (idx, pattern) in PATTERNS.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("   "));
        }
        let style = if idx == selected {
            Style::default()
                .fg(SELECTED)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(UNSELECTED)
        };
        spans.push(Span::styled(
            format!(" {}. {} ", idx + 1, pattern.name),
            style,
        ));
    }
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

fn draw_circle(frame: &mut Frame<'_>, view: &BreathingView, area: Rect) {
    let color = phase_color(view.phase);
    let circle = circle_rect(view.expanded, area);

    let mut lines = Vec::new();
    let padding = circle.height.saturating_sub(4) / 2;
    for _ in 0..padding {
        lines.push(Line::raw(""));
    }
    lines.push(Line::from(Span::styled(
        view.headline,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    if let Some(seconds) = view.seconds {
        lines.push(Line::from(Span::styled(
            seconds.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(widget, circle);
}

fn draw_tips(frame: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (tip, column) in TIPS.iter().zip(columns.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                tip.title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(tip.body, Style::default().fg(SUBTITLE))),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(PANEL_BORDER)),
        );
        frame.render_widget(card, *column);
    }
}
