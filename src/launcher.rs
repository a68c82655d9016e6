use std::process::{Command, Stdio};

use tracing::{info, warn};

/// Open an announcement link in the default browser.
///
/// The opener is spawned detached and never waited on; a failure to spawn is
/// logged and otherwise ignored. `external` is browser semantics (new tab)
/// and only shows up in the log line here.
pub fn open_link(url: &str, external: bool) {
    let mut command = opener_command(url);
    command.stdout(Stdio::null()).stderr(Stdio::null());
    match command.spawn() {
        Ok(_) => info!(url, external, "opened announcement link"),
        Err(e) => warn!(url, error = %e, "failed to open announcement link"),
    }
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}
