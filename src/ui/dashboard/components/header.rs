//! Dashboard header component
//!
//! Renders the title and the current-date display

use super::super::state::DashboardState;
use crate::events::PollerStatus;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Placeholder until the first successful poll.
const NO_DATE_LABEL: &str = "Mars: Sol --";

/// Render header with title, Sol label and poller status.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title = Paragraph::new(format!(
        "SIMOC STEP DASHBOARD v{}",
        env!("CARGO_PKG_VERSION")
    ))
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    let date_label = state.sol_label().unwrap_or(NO_DATE_LABEL);
    let (progress_text, gauge_color, progress_percent) = match state.poller_status() {
        PollerStatus::Running => {
            // Loops every 20 UI ticks
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                format!("{}  |  POLLING", date_label),
                Color::LightRed,
                progress,
            )
        }
        PollerStatus::Paused => (format!("{}  |  PAUSED", date_label), Color::DarkGray, 100),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
