//! Terminal UI helpers for consistent colored output.

use std::future::Future;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

/// Print a success message with green checkmark.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message with red X.
fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a hint/suggestion (dimmed, indented).
fn hint(msg: &str) {
    eprintln!("  {} {}", "→".dimmed(), msg.dimmed());
}

/// Format a value as bold (for usernames, ids, etc.).
pub fn bold(s: &str) -> String {
    s.bold().to_string()
}

/// Run an async operation with a spinner showing the given message.
/// Returns the result of the operation.
pub async fn spin<T, F: Future<Output = T>>(msg: &str, fut: F) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.dim} {msg}")
            .unwrap(),
    );
    spinner.set_message(msg.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let result = fut.await;

    spinner.finish_and_clear();
    result
}

/// Display an error with contextual hints based on the error message.
pub fn print_error(err: &anyhow::Error) {
    let msg = err.to_string();
    error(&msg);

    // Add contextual hints based on error patterns
    if msg.contains("No unexpired messages") {
        hint("Messages are delivered once and expire; there may be nothing waiting.");
    } else if msg.contains("connection")
        || msg.contains("Connection")
        || msg.contains("dns")
        || msg.contains("DNS")
        || msg.contains("timeout")
        || msg.contains("Timeout")
        || msg.contains("Network")
        || msg.contains("network")
        || msg.contains("No such host")
        || msg.contains("resolve")
    {
        hint("Check that the server is reachable and try again.");
    }
}
