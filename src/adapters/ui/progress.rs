//! Indicatif spinner shown while a question is in flight.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create the "thinking" spinner. The chat loop does not read input again
/// until the caller finishes it, which serializes submissions.
pub fn thinking_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").expect("spinner template"));
    pb.set_message("thinking...");
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
