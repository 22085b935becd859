use ratatui::style::Color;

pub const TITLE: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const SUBTITLE: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const QUOTE_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const PANEL_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SELECTED: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const UNSELECTED: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const COUNT: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const HINT_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);

pub const INHALE: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const HOLD_FULL: Color = Color::Rgb(0xc0, 0x84, 0xfc);
pub const EXHALE: Color = Color::Rgb(0xf4, 0x72, 0xb6);
pub const REST: Color = Color::Rgb(0x93, 0xc5, 0xfd);

/// Circle colour for a phase; `None` is idle.
pub fn phase_color(phase: Option<usize>) -> Color {
    match phase {
        Some(0) => INHALE,
        Some(1) => HOLD_FULL,
        Some(2) => EXHALE,
        _ => REST,
    }
}
