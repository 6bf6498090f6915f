//! Layout definitions for the TUI
//!
//! Tab bar on top, the active form on the left, the network log and result
//! panel stacked on the right, status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    pub tabs: Rect,
    /// Active form
    pub form: Rect,
    /// Network log
    pub log: Rect,
    /// Latest result
    pub result: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tabs
                Constraint::Min(8),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(vertical[1]);

        let panels = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(horizontal[1]);

        Self {
            tabs: vertical[0],
            form: horizontal[0],
            log: panels[0],
            result: panels[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout inside the wizard tab
pub struct WizardLayout {
    /// Step indicator and progress gauge
    pub header: Rect,
    /// Fields or review preview
    pub body: Rect,
    /// Navigation hints
    pub nav: Rect,
}

impl WizardLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            nav: chunks[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Top-right corner area for toasts
pub fn toast_area(r: Rect) -> Rect {
    let width = r.width.min(44);
    let height = r.height.min(5);
    Rect::new(r.x + r.width - width, r.y + (r.height - height).min(1), width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_covers_area() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = AppLayout::new(area);
        assert_eq!(layout.tabs.height, 3);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.form.x, 0);
        assert_eq!(layout.log.x, layout.result.x);
        assert!(layout.log.y < layout.result.y);
    }

    #[test]
    fn test_toast_area_fits_small_terminals() {
        let area = Rect::new(0, 0, 30, 4);
        let toast = toast_area(area);
        assert!(toast.right() <= area.right());
        assert!(toast.bottom() <= area.bottom());
    }

    #[test]
    fn test_centered_rect_fixed() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect_fixed(50, 7, area);
        assert_eq!(rect, Rect::new(25, 21, 50, 7));
    }
}
