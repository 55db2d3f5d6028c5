//! Best-effort output filtering through an external command.

use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// Pipe `text` through `filter_command` and return the filter's stdout.
///
/// The filter command runs in a shell, so pipelines like `grep -v warning`
/// work as written. Filtering cannot fail from the caller's perspective: with
/// no filter command or empty text the input is returned unchanged, and if
/// the filter fails to spawn or exits non-zero the original text is returned
/// exactly. A capture is never turned into an error or an empty result by
/// filtering.
pub async fn apply_filter(text: String, filter_command: Option<&str>) -> String {
    let filter = match filter_command {
        Some(f) if !f.is_empty() && !text.is_empty() => f,
        _ => return text,
    };

    match run_filter(&text, filter).await {
        Some(filtered) => filtered,
        None => {
            debug!(filter, "filter failed, keeping unfiltered output");
            text
        }
    }
}

/// Returns `None` on any failure so the caller falls back to the input.
async fn run_filter(text: &str, filter: &str) -> Option<String> {
    let (shell, flag) = shell_command();

    let mut child = Command::new(shell)
        .arg(flag)
        .arg(filter)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;

    let mut stdin = child.stdin.take()?;
    let input = text.as_bytes().to_vec();
    // Feed stdin from a separate task; writing inline can deadlock once the
    // filter's output fills the pipe. Dropping stdin gives the filter EOF.
    let writer = tokio::spawn(async move {
        let _ = stdin.write_all(&input).await;
    });

    let output = child.wait_with_output().await.ok()?;
    let _ = writer.await;

    if !output.status.success() {
        return None;
    }

    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(windows)]
fn shell_command() -> (&'static str, &'static str) {
    ("cmd", "/C")
}

#[cfg(not(windows))]
fn shell_command() -> (&'static str, &'static str) {
    ("sh", "-c")
}
