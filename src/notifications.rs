/// Cross-platform notification support
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

/// Send a desktop notification when a Pomodoro phase completes
pub fn notify_phase_complete(phase_label: &str) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "✨ {} session complete" with title "Pomodesk""#,
            phase_label.replace('"', "\\\"")
        );

        let _ = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output();
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = phase_label;
    }
}
