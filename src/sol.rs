//! Martian calendar helpers.
//!
//! Converts a simulation step number into the sol shown on the dashboard.

use crate::consts::cli_consts::STEPS_PER_SOL;
use crate::step_api::StepNumber;

/// Sol (1-based) for a possibly fractional step count: `floor(1 + step / 24.65)`.
pub fn sol_day(step: f64) -> u64 {
    (1.0 + step / STEPS_PER_SOL).floor() as u64
}

/// Sol for an integral step number.
pub fn sol_day_for_step(step_num: StepNumber) -> u64 {
    sol_day(step_num as f64)
}

/// Text shown in the current-date display.
pub fn sol_label(step_num: StepNumber) -> String {
    format!("Mars: Sol {}", sol_day_for_step(step_num))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sol_day_boundaries() {
        assert_eq!(sol_day(0.0), 1);
        assert_eq!(sol_day(24.0), 1);
        assert_eq!(sol_day(24.65), 2);
        assert_eq!(sol_day(49.3), 3);
        assert_eq!(sol_day(24.65 * 10.0), 11);
    }

    #[test]
    fn test_sol_day_for_integral_steps() {
        assert_eq!(sol_day_for_step(0), 1);
        assert_eq!(sol_day_for_step(1), 1);
        assert_eq!(sol_day_for_step(24), 1);
        assert_eq!(sol_day_for_step(25), 2);
        assert_eq!(sol_day_for_step(8760), 356);
    }

    #[test]
    fn test_sol_label_format() {
        assert_eq!(sol_label(0), "Mars: Sol 1");
        assert_eq!(sol_label(50), "Mars: Sol 3");
    }
}
