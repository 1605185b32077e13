#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use anyhow::Result;
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;

use crate::domain::models::Action;
use crate::domain::services::ViewController;

/// Runs the console until `/quit` or end of input.
///
/// Each line is handled to completion before the next one is read.
pub async fn start_loop<R>(controller: &mut ViewController, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    controller.on_startup().await;
    controller.prompt();

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            controller.prompt();
            continue;
        }

        match Action::parse(line) {
            Ok(Action::Quit) => break,
            Ok(action) => controller.dispatch(action).await,
            Err(err) => controller.notice(&err.to_string()),
        }

        controller.prompt();
    }

    tracing::debug!("console loop finished");
    return Ok(());
}
