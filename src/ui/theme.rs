use crate::domain::ThemeName;
use ratatui::style::{Color, Modifier, Style};

/// Resolved color palette for one theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub danger: Color,
    pub upcoming: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub selection_bg: Color,
}

/// Map a theme name to its palette. Colors follow the app's three classic
/// palettes (light blue, dark blue, pink) rather than terminal defaults, so
/// switching themes visibly recolors every pane.
pub fn palette(theme: ThemeName) -> Palette {
    match theme {
        ThemeName::LightBlue => Palette {
            primary: Color::Rgb(0x00, 0x7b, 0xff),
            secondary: Color::Rgb(0x6c, 0x75, 0x7d),
            success: Color::Rgb(0x28, 0xa7, 0x45),
            danger: Color::Rgb(0xdc, 0x35, 0x45),
            upcoming: Color::Rgb(0xab, 0x47, 0xbc),
            text: Color::White,
            text_dim: Color::Gray,
            border: Color::Rgb(0x7a, 0x9c, 0xc6),
            header_bg: Color::Rgb(0x00, 0x7b, 0xff),
            header_fg: Color::White,
            selection_bg: Color::Rgb(0x1a, 0x3a, 0x5c),
        },
        ThemeName::DarkBlue => Palette {
            primary: Color::Rgb(0x4d, 0xa3, 0xff),
            secondary: Color::Rgb(0xb0, 0xb0, 0xb0),
            success: Color::Rgb(0x28, 0xa7, 0x45),
            danger: Color::Rgb(0xff, 0x6b, 0x6b),
            upcoming: Color::Rgb(0xab, 0x47, 0xbc),
            text: Color::Rgb(0xe8, 0xe8, 0xe8),
            text_dim: Color::Rgb(0x80, 0x80, 0x80),
            border: Color::Rgb(0x4d, 0x4d, 0x4d),
            header_bg: Color::Rgb(0x00, 0x56, 0xb3),
            header_fg: Color::White,
            selection_bg: Color::Rgb(0x2d, 0x2d, 0x2d),
        },
        ThemeName::Pink => Palette {
            primary: Color::Rgb(0xff, 0x14, 0x93),
            secondary: Color::Rgb(0xff, 0x69, 0xb4),
            success: Color::Rgb(0x50, 0xc8, 0x78),
            danger: Color::Rgb(0xff, 0x47, 0x57),
            upcoming: Color::Rgb(0xc7, 0x15, 0x85),
            text: Color::White,
            text_dim: Color::Rgb(0x99, 0x99, 0x99),
            border: Color::Rgb(0xff, 0xc0, 0xd9),
            header_bg: Color::Rgb(0xff, 0x14, 0x93),
            header_fg: Color::White,
            selection_bg: Color::Rgb(0x5c, 0x1a, 0x3a),
        },
    }
}

impl Palette {
    pub fn default_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.text)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn done_style(&self) -> Style {
        Style::default()
            .fg(self.text_dim)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn overdue_style(&self) -> Style {
        Style::default().fg(self.danger).add_modifier(Modifier::BOLD)
    }

    pub fn today_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn upcoming_style(&self) -> Style {
        Style::default().fg(self.upcoming)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success).add_modifier(Modifier::BOLD)
    }

    pub fn clock_style(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn paused_style(&self) -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn subject_style(&self) -> Style {
        Style::default().fg(self.secondary)
    }

    pub fn modal_style(&self) -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn modal_title_style(&self) -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.danger).add_modifier(Modifier::BOLD)
    }
}
