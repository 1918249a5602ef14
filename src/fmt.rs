//! Shared formatting utilities for size display and console output

use console::Emoji;

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Format bytes as human-readable size string
///
/// # Examples
///
/// ```
/// use size_deltas::fmt::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(262_144), "256.00 KB");
/// assert_eq!(format_bytes(1_048_576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
