//! Dashboard footer component
//!
//! Renders footer with key bindings

use super::super::state::DashboardState;
use crate::events::PollerStatus;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer with quit and pause instructions.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let pause_hint = match state.poller_status() {
        PollerStatus::Running => "[P] Pause",
        PollerStatus::Paused => "[P] Resume",
    };
    let footer_text = format!("[Q] Quit | {} | SIMOC Step Dashboard", pause_hint);

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
