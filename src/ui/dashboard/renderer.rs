//! Dashboard main renderer

use super::components::{chart, footer, header, logs, readouts};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(24, 16, 14))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(35),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(main_chunks[1]);

    readouts::render_readouts_panel(f, content_chunks[0], state);
    chart::render_chart_panel(f, content_chunks[1], state);
    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3], state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::events::Event;
    use crate::poller::PollUpdate;
    use crate::step_api::StepSample;
    use crate::ui::app::UIConfig;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_shows_sol_label_and_readouts() {
        let mut state = DashboardState::new(
            Environment::Local,
            Instant::now(),
            UIConfig::new(true, 1, 1000),
        );
        state.add_event(Event::poll_update(PollUpdate {
            sample: StepSample {
                avg_oxygen_pressure: 0.21,
                avg_carbon_dioxide: 0.04,
                total_water: 1000.0,
                step_num: 0,
            },
            sol_label: "Mars: Sol 1".to_string(),
        }));
        state.update();

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render_dashboard(f, &state)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Mars: Sol 1"));
        assert!(text.contains("0.2100"));
        assert!(text.contains("STEP METRICS"));
        assert!(text.contains("[P] Pause"));
    }

    #[test]
    fn test_render_before_first_poll() {
        let state = DashboardState::new(
            Environment::Local,
            Instant::now(),
            UIConfig::new(false, 1, 1000),
        );

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render_dashboard(f, &state)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Mars: Sol --"));
        assert!(text.contains("Waiting for first step..."));
        assert!(text.contains("No data yet"));
    }
}
