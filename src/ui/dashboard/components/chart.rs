//! Dashboard chart component
//!
//! Renders the step metrics as a bar chart

use super::super::state::DashboardState;
use crate::ui::chart::{BAR_SCALE, SERIES_LABELS, format_metric};
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph};

const SERIES_COLORS: [Color; 3] = [Color::LightBlue, Color::LightYellow, Color::LightCyan];

/// Render the metrics bar chart.
pub fn render_chart_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title("STEP METRICS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if !state.chart.has_data() {
        f.render_widget(Paragraph::new("No data yet").block(block), area);
        return;
    }

    let values = state.chart.values();
    let heights = state.chart.bar_heights();
    let bars: Vec<Bar> = (0..SERIES_LABELS.len())
        .map(|i| {
            Bar::default()
                .value(heights[i])
                .label(Line::from(SERIES_LABELS[i]))
                .text_value(format_metric(values[i]))
                .style(Style::default().fg(SERIES_COLORS[i]))
        })
        .collect();

    // Three bars sharing the inner width
    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width.saturating_sub(4) / 3).clamp(3, 20);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(2)
        .max(BAR_SCALE);
    f.render_widget(chart, area);
}
