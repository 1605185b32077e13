#[cfg(test)]
#[path = "console_test.rs"]
mod tests;

use std::io::Write;

use wags_types::Broadcast;
use wags_types::BroadcastStatus;
use wags_types::Message;
use wags_types::MessageStatus;
use yansi::Color;
use yansi::Paint;

use crate::domain::models::ClientError;
use crate::domain::models::DashboardStats;
use crate::domain::models::PageId;
use crate::domain::models::Renderer;
use crate::domain::models::SendKind;
use crate::domain::models::SendOutcome;
use crate::domain::models::View;
use crate::domain::models::YearsSelection;

fn view_title(view: View) -> &'static str {
    match view {
        View::Dashboard => "dashboard",
        View::Messages => "messages",
        View::Broadcasts => "broadcasts",
        View::BroadcastDetails => "broadcast details",
    }
}

fn page_title(page: PageId) -> &'static str {
    match page {
        PageId::Dashboard => "Dashboard",
        PageId::Messages => "Messages",
        PageId::Broadcasts => "Broadcasts",
    }
}

fn message_color(status: &MessageStatus) -> Option<Color> {
    match status {
        MessageStatus::Sent => Some(Color::Green),
        MessageStatus::Failed => Some(Color::Red),
        MessageStatus::Processing => Some(Color::Cyan),
        MessageStatus::Pending | MessageStatus::Queued => Some(Color::Yellow),
        MessageStatus::Other(_) => None,
    }
}

fn broadcast_color(status: &BroadcastStatus) -> Option<Color> {
    match status {
        BroadcastStatus::Done => Some(Color::Green),
        BroadcastStatus::Failed => Some(Color::Red),
        BroadcastStatus::Process => Some(Color::Yellow),
        BroadcastStatus::Other(_) => None,
    }
}

/// Line-oriented renderer for a terminal.
///
/// Output failures are logged and otherwise ignored: the console keeps
/// running even when stdout is gone.
pub struct ConsoleRenderer<W: Write + Send> {
    out: W,
    color: bool,
}

impl<W: Write + Send> ConsoleRenderer<W> {
    pub fn new(out: W, color: bool) -> ConsoleRenderer<W> {
        return ConsoleRenderer { out, color };
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: Option<Color>) -> String {
        match color {
            Some(color) if self.color => Paint::new(text).fg(color).to_string(),
            _ => text.to_string(),
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            return Paint::new(text).bold().to_string();
        }

        return text.to_string();
    }

    fn line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}") {
            tracing::warn!(error = %err, "could not write to the terminal");
        }
    }

    fn message_table(&mut self, messages: &[Message], with_broadcast: bool) {
        let mut header = format!("{:<8} {:<16} {:<11}", "ID", "RECIPIENT", "STATUS");
        if with_broadcast {
            header.push_str(&format!(" {:<9}", "BROADCAST"));
        }
        header.push_str(&format!(" {:<19} {:<19} {:<19}", "STORED", "QUEUED", "SENT"));
        let header = self.bold(header.trim_end());
        self.line(&header);

        for message in messages {
            let status = format!("{:<11}", message.status.as_str());
            let status = self.paint(&status, message_color(&message.status));
            let mut row = format!("{:<8} {:<16} {}", message.id, message.recipient, status);
            if with_broadcast {
                row.push_str(&format!(" {:<9}", message.broadcast_message));
            }
            row.push_str(&format!(
                " {:<19} {:<19} {}",
                message.dt_store,
                message.dt_queue,
                message.dt_send.as_deref().unwrap_or("-")
            ));
            self.line(&row);
        }
    }
}

impl<W: Write + Send> Renderer for ConsoleRenderer<W> {
    fn show_login(&mut self, error: Option<&str>) {
        if let Some(error) = error {
            let error = self.paint(error, Some(Color::Red));
            self.line(&error);
        }
        self.line("Log in with /login USER KEY, or /help for all commands.");
    }

    fn show_main(&mut self, username: &str) {
        let username = self.bold(username);
        self.line(&format!("Logged in as {username}."));
    }

    fn show_page(&mut self, visible: PageId, _hidden: &[PageId]) {
        let title = self.bold(&format!("== {} ==", page_title(visible)));
        self.line(&title);
    }

    fn loading(&mut self, view: View, active: bool) {
        if active {
            self.line(&format!("Loading {}...", view_title(view)));
        }
    }

    fn dashboard(&mut self, stats: &DashboardStats) {
        let sent = self.paint(&stats.sent.to_string(), Some(Color::Green));
        let failed = self.paint(&stats.failed.to_string(), Some(Color::Red));
        self.line(&format!(
            "Total messages: {}   Sent: {sent}   Failed: {failed}",
            stats.total
        ));
    }

    fn messages(&mut self, messages: &[Message]) {
        if messages.is_empty() {
            self.line("No messages found");
            return;
        }

        self.message_table(messages, true);
    }

    fn broadcasts(&mut self, broadcasts: &[Broadcast]) {
        if broadcasts.is_empty() {
            self.line("No broadcasts found");
            return;
        }

        let header = format!("{:<8} {:<10} {:<19} {}", "ID", "STATUS", "STORED", "CONVERTED");
        let header = self.bold(&header);
        self.line(&header);

        for broadcast in broadcasts {
            let status = format!("{:<10}", broadcast.status.as_str());
            let status = self.paint(&status, broadcast_color(&broadcast.status));
            self.line(&format!(
                "{:<8} {} {:<19} {}",
                broadcast.id,
                status,
                broadcast.dt_store,
                broadcast.dt_convert.as_deref().unwrap_or("-")
            ));
        }
    }

    fn broadcast_details(&mut self, broadcast_id: i64, messages: &[Message]) {
        let title = self.bold(&format!("Broadcast {broadcast_id}"));
        self.line(&title);

        if messages.is_empty() {
            self.line("No messages found for this broadcast");
            return;
        }

        self.message_table(messages, false);
    }

    fn message_details(&mut self, message: &Message) {
        let status = self.paint(message.status.as_str(), message_color(&message.status));
        let title = self.bold(&format!("Message {}", message.id));

        self.line(&title);
        self.line(&format!("  Recipient: {}", message.recipient));
        self.line(&format!("  Status:    {status}"));
        self.line(&format!("  Stored:    {}", message.dt_store));
        self.line(&format!("  Queued:    {}", message.dt_queue));
        self.line(&format!(
            "  Sent:      {}",
            message.dt_send.as_deref().unwrap_or("-")
        ));
        self.line(&format!("  Message:   {}", message.message));
    }

    fn years(&mut self, selection: &YearsSelection) {
        let years = selection
            .years
            .iter()
            .map(|year| year.to_string())
            .collect::<Vec<String>>();

        match selection.default {
            Some(default) => self.line(&format!(
                "Years with data: {} (filters start on {default})",
                years.join(", ")
            )),
            None => self.line("No years with data yet"),
        }
    }

    fn load_error(&mut self, view: View, error: &ClientError) {
        let text = format!("Error loading {}: {error}", view_title(view));
        let text = self.paint(&text, Some(Color::Red));
        self.line(&text);
    }

    fn send_result(&mut self, kind: SendKind, result: &Result<SendOutcome, ClientError>) {
        let (text, color) = match (kind, result) {
            (_, Ok(SendOutcome::Message(id))) => (
                format!("Message queued successfully with ID: {id}"),
                Color::Green,
            ),
            (_, Ok(SendOutcome::Bulk(id))) => (
                format!("Bulk message queued successfully with ID: {id}"),
                Color::Green,
            ),
            (_, Err(ClientError::InvalidInput(text))) => (text.to_string(), Color::Red),
            (SendKind::Message, Err(err)) => (format!("Error sending message: {err}"), Color::Red),
            (SendKind::Bulk, Err(err)) => {
                (format!("Error sending bulk message: {err}"), Color::Red)
            }
        };

        let text = self.paint(&text, Some(color));
        self.line(&text);
    }

    fn notice(&mut self, text: &str) {
        self.line(text);
    }

    fn prompt(&mut self, username: Option<&str>, page: Option<PageId>) {
        let prompt = match (username, page) {
            (Some(username), Some(page)) => format!("{username}@{page}> "),
            _ => "wags> ".to_string(),
        };

        let prompt = self.paint(&prompt, Some(Color::Cyan));
        if let Err(err) = write!(self.out, "{prompt}").and_then(|_| self.out.flush()) {
            tracing::warn!(error = %err, "could not write to the terminal");
        }
    }
}
