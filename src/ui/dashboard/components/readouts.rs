//! Dashboard readouts component
//!
//! Renders the three numeric readouts and poll statistics

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, format_uptime};
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn readout_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
        Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Render readouts panel.
pub fn render_readouts_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines = Vec::new();

    match state.latest_sample() {
        Some(sample) => {
            lines.push(readout_line(
                "Step",
                sample.step_num.to_string(),
                Color::White,
            ));
            lines.push(readout_line(
                "O2 pressure",
                format!("{:.4}", sample.avg_oxygen_pressure),
                Color::LightBlue,
            ));
            lines.push(readout_line(
                "CO2",
                format!("{:.4}", sample.avg_carbon_dioxide),
                Color::LightYellow,
            ));
            lines.push(readout_line(
                "Water",
                format!("{:.2}", sample.total_water),
                Color::LightCyan,
            ));
        }
        None => lines.push(Line::from("Waiting for first step...")),
    }

    lines.push(Line::from(""));
    lines.push(readout_line(
        "Server",
        state.environment.base_url(),
        Color::Green,
    ));
    lines.push(readout_line(
        "Cadence",
        format!("{} ms, +{} step(s)", state.poll_interval_ms, state.step_size),
        Color::Cyan,
    ));
    lines.push(readout_line(
        "Polls",
        format!(
            "{} ok / {} failed",
            state.polls_succeeded(),
            state.polls_failed()
        ),
        Color::White,
    ));
    let last_update = state
        .last_update_timestamp()
        .map(format_compact_timestamp)
        .unwrap_or_else(|| "Never".to_string());
    lines.push(readout_line("Last update", last_update, Color::Yellow));
    lines.push(readout_line(
        "Uptime",
        format_uptime(state.start_time.elapsed()),
        Color::LightGreen,
    ));

    let block = Block::default()
        .title("READOUTS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
