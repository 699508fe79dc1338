//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Worker;
use ratatui::prelude::Color;
use std::time::Duration;

/// Get a ratatui color for an event source
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::StepPoller => Color::Cyan,
        Worker::Control => Color::Yellow,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min_sec)) = (date_part.get(5..10), time_part.get(0..8))
        {
            return format!("{} {}", month_day, hour_min_sec);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") && msg.contains("operation timed out") {
        return "Request timed out".to_string();
    }
    if msg.contains("Reqwest error") && msg.contains("error sending request") {
        return "Server unreachable".to_string();
    }
    msg.to_string()
}

/// Human-readable uptime, coarsest unit first
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    if secs >= 86400 {
        format!(
            "{}d {}h {}m",
            secs / 86400,
            (secs % 86400) / 3600,
            (secs % 3600) / 60
        )
    } else if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
