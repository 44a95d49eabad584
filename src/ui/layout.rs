use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub header_area: Rect,
    pub tabs_area: Rect,
    pub content_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Header: greeting banner (3 rows)
/// - Tab bar (1 row)
/// - Content: active tab pane
/// - Bottom bar: keybinding hints (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header banner
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Keybindings bar
        ])
        .split(area);

    MainLayout {
        header_area: chunks[0],
        tabs_area: chunks[1],
        content_area: chunks[2],
        keybindings_area: chunks[3],
    }
}

/// Create centered modal area (for the add-task form)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Length(18),
            Constraint::Percentage(20),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create_layout(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.tabs_area.height, 1);
        assert!(layout.content_area.height > 0);
        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(
            layout.header_area.height
                + layout.tabs_area.height
                + layout.content_area.height
                + layout.keybindings_area.height,
            area.height
        );
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area);

        assert!(modal.width < area.width);
        assert!(modal.height < area.height);
        assert_eq!(modal.height, 18);
    }
}
