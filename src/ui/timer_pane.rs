use crate::app::AppState;
use crate::timer::Phase;
use crate::ui::theme::palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Blow the MM:SS display up into banner digits so the clock is readable
/// from across the room
fn big_digits(display: &str) -> Vec<String> {
    const GLYPHS: [[&str; 5]; 11] = [
        ["█▀█", "█ █", "█ █", "█ █", "▀▀▀"], // 0
        [" █ ", "▀█ ", " █ ", " █ ", " ▀ "], // 1
        ["▀▀█", "▄▄█", "█▄▄", "█  ", "▀▀▀"], // 2
        ["▀▀█", "▄▄█", "  █", "  █", "▀▀▀"], // 3
        ["█ █", "█ █", "▀▀█", "  █", "  ▀"], // 4
        ["█▀▀", "█▄▄", "▄▄█", "  █", "▀▀▀"], // 5
        ["█▀▀", "█▄▄", "█ █", "█ █", "▀▀▀"], // 6
        ["▀▀█", "  █", "  █", "  █", "  ▀"], // 7
        ["█▀█", "█▄█", "█ █", "█ █", "▀▀▀"], // 8
        ["█▀█", "█▄█", "▄▄█", "  █", "▀▀▀"], // 9
        ["   ", " ▄ ", "   ", " ▄ ", "   "], // :
    ];

    let mut rows = vec![String::new(); 5];
    for ch in display.chars() {
        let glyph = match ch {
            '0'..='9' => &GLYPHS[ch as usize - '0' as usize],
            ':' => &GLYPHS[10],
            _ => continue,
        };
        for (row, part) in rows.iter_mut().zip(glyph.iter()) {
            row.push_str(part);
            row.push(' ');
        }
    }
    rows
}

/// Render the Pomodoro pane: phase, big clock, status, controls
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let colors = palette(app.settings.theme);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" ⏲ Pomodoro Timer ", colors.title_style()))
        .border_style(colors.border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Phase line
            Constraint::Length(5), // Big clock
            Constraint::Length(2), // Status flash
            Constraint::Min(0),    // Session info
        ])
        .split(inner);

    let phase_label = match app.timer.phase() {
        Phase::Work => "Work session",
        Phase::Break => "Break",
    };
    let state_span = if app.timer.is_running() {
        if app.timer.is_paused() {
            Span::styled("⏸ Paused", colors.paused_style())
        } else {
            Span::styled("● Running", colors.success_style())
        }
    } else {
        Span::styled("○ Idle", colors.hint_style())
    };
    let phase_line = Paragraph::new(Line::from(vec![
        Span::styled(phase_label, colors.subject_style()),
        Span::raw("   "),
        state_span,
    ]))
    .alignment(Alignment::Center);
    f.render_widget(phase_line, chunks[0]);

    let clock_lines: Vec<Line> = big_digits(&app.timer_display)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, colors.clock_style())))
        .collect();
    let clock = Paragraph::new(clock_lines).alignment(Alignment::Center);
    f.render_widget(clock, chunks[1]);

    if let Some(message) = &app.status_message {
        let flash = Paragraph::new(Line::from(Span::styled(
            format!("✨ {}", message),
            colors.success_style(),
        )))
        .alignment(Alignment::Center);
        f.render_widget(flash, chunks[2]);
    }

    let info = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!(
                "{} min work · {} min break · one break follows each work session",
                app.settings.work_minutes, app.settings.break_minutes
            ),
            colors.hint_style(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(info, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_digits_shape() {
        let rows = big_digits("25:00");
        assert_eq!(rows.len(), 5);
        // 5 glyphs, 3 cells wide plus a trailing space each
        for row in &rows {
            assert_eq!(row.chars().count(), 5 * 4);
        }
    }

    #[test]
    fn test_big_digits_ignores_unknown_chars() {
        let rows = big_digits("1a2");
        for row in &rows {
            assert_eq!(row.chars().count(), 2 * 4);
        }
    }
}
