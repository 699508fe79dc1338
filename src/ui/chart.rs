//! Bar chart data for the three step metrics.

/// Series labels, in display order.
pub const SERIES_LABELS: [&str; 3] = ["O2 avg", "CO2 avg", "Water"];

/// Bar height resolution; a bar at its series peak is this tall.
pub const BAR_SCALE: u64 = 1000;

/// Latest values fed to the chart plus the peak of each series.
///
/// The metrics live on very different scales (a fraction of an atmosphere
/// against litres of water), so each bar is drawn relative to its own peak.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartState {
    values: [f64; 3],
    peaks: [f64; 3],
    updates: u64,
}

impl ChartState {
    /// Replace the charted values.
    pub fn update(&mut self, oxygen: f64, carbon_dioxide: f64, water: f64) {
        self.values = [oxygen, carbon_dioxide, water];
        for (peak, value) in self.peaks.iter_mut().zip(self.values) {
            if value.is_finite() && value > *peak {
                *peak = value;
            }
        }
        self.updates += 1;
    }

    pub fn values(&self) -> [f64; 3] {
        self.values
    }

    pub fn has_data(&self) -> bool {
        self.updates > 0
    }

    /// Bar heights in `0..=BAR_SCALE`.
    pub fn bar_heights(&self) -> [u64; 3] {
        let mut heights = [0; 3];
        for (i, height) in heights.iter_mut().enumerate() {
            let (value, peak) = (self.values[i], self.peaks[i]);
            if peak > 0.0 && value.is_finite() && value > 0.0 {
                *height = ((value / peak) * BAR_SCALE as f64).round() as u64;
            }
        }
        heights
    }
}

/// Compact number formatting for bar captions.
pub fn format_metric(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("{:.0}", value)
    } else if value.abs() >= 1.0 {
        format!("{:.2}", value)
    } else {
        format!("{:.4}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chart_has_flat_bars() {
        let chart = ChartState::default();
        assert!(!chart.has_data());
        assert_eq!(chart.bar_heights(), [0, 0, 0]);
    }

    #[test]
    fn test_bars_scale_to_series_peak() {
        let mut chart = ChartState::default();
        chart.update(0.21, 0.04, 1000.0);
        assert_eq!(chart.bar_heights(), [BAR_SCALE; 3]);

        chart.update(0.105, 0.04, 250.0);
        assert_eq!(chart.values(), [0.105, 0.04, 250.0]);
        assert_eq!(chart.bar_heights(), [500, 1000, 250]);
    }

    #[test]
    fn test_non_finite_values_do_not_poison_peaks() {
        let mut chart = ChartState::default();
        chart.update(0.2, f64::NAN, 10.0);
        chart.update(0.1, 0.05, 5.0);
        assert_eq!(chart.bar_heights(), [500, 1000, 500]);
    }

    #[test]
    fn test_format_metric() {
        assert_eq!(format_metric(1000.0), "1000");
        assert_eq!(format_metric(12.346), "12.35");
        assert_eq!(format_metric(0.21), "0.2100");
    }
}
