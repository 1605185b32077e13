#[cfg(test)]
#[path = "action_test.rs"]
mod tests;

use super::ClientError;
use super::MonthFilter;
use super::PageId;

/// Something the user asked the console to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Login { username: String, key: String },
    Logout,
    Navigate(PageId),
    FilterMessages { year: i32, month: Option<MonthFilter> },
    FilterBroadcasts { year: i32, month: Option<MonthFilter> },
    OpenBroadcast(i64),
    OpenMessage(i64),
    SendMessage { recipient: String, text: String },
    SendBulk { recipients: String, text: String },
    Help,
    Quit,
}

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /login USER KEY - Log in with your username and API key.
- /logout - Log out and forget the cached credential.
- /dashboard (/d) - Message counters for the current month.
- /messages (/m) [YEAR [MONTH|all]] - List messages, optionally changing the filter.
- /broadcasts (/b) [YEAR [MONTH|all]] - List broadcasts, optionally changing the filter.
- /broadcast ID - Show the messages produced by one broadcast.
- /message ID - Show one message from the last listed table.
- /send RECIPIENT TEXT - Queue a single message.
- /bulk R1,R2,... TEXT - Queue one message for several recipients.
- /quit /exit (/q) - Exit the console.
- /help (/h) - Provides this help menu.
        "#;

    text.trim().to_string()
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(idx) => (&input[..idx], input[idx..].trim()),
        None => (input, ""),
    }
}

// Recipients may be written "a,b" or "a, b": the list keeps going while a
// comma sits at the end of a word or the start of the next one.
fn split_recipients(input: &str) -> (&str, &str) {
    let input = input.trim();
    let mut end = 0;

    loop {
        let rest = &input[end..];
        let word_start = end + (rest.len() - rest.trim_start().len());
        let word_len = input[word_start..]
            .find(char::is_whitespace)
            .unwrap_or(input.len() - word_start);
        end = word_start + word_len;

        let next = input[end..].trim_start();
        let continues = input[..end].ends_with(',') || next.starts_with(',');
        if !continues || next.is_empty() {
            break;
        }
    }

    (&input[..end], input[end..].trim())
}

fn usage(text: &str) -> ClientError {
    ClientError::InvalidInput(format!("Usage: {text}"))
}

fn parse_id(input: &str, usage_text: &str) -> Result<i64, ClientError> {
    let (id, rest) = split_word(input);
    if !rest.is_empty() {
        return Err(usage(usage_text));
    }

    id.parse::<i64>().map_err(|_| usage(usage_text))
}

fn parse_filter(input: &str, usage_text: &str) -> Result<Option<(i32, Option<MonthFilter>)>, ClientError> {
    let words = input.split_whitespace().collect::<Vec<&str>>();
    match words.as_slice() {
        [] => Ok(None),
        [year] => {
            let year = year.parse::<i32>().map_err(|_| usage(usage_text))?;
            Ok(Some((year, None)))
        }
        [year, month] => {
            let year = year.parse::<i32>().map_err(|_| usage(usage_text))?;
            let month = month.parse::<MonthFilter>()?;
            Ok(Some((year, Some(month))))
        }
        _ => Err(usage(usage_text)),
    }
}

impl Action {
    /// Parses one line of console input.
    pub fn parse(line: &str) -> Result<Action, ClientError> {
        let line = line.trim();
        if !line.starts_with('/') {
            return Err(ClientError::InvalidInput(
                "Commands start with '/'. Type /help for the list.".to_string(),
            ));
        }

        let (command, rest) = split_word(&line[1..]);
        let action = match command.to_lowercase().as_str() {
            "login" => {
                let (username, key) = split_word(rest);
                if username.is_empty() || key.is_empty() || key.contains(char::is_whitespace) {
                    return Err(usage("/login USER KEY"));
                }
                Action::Login {
                    username: username.to_string(),
                    key: key.to_string(),
                }
            }
            "logout" => Action::Logout,
            "dashboard" | "d" => Action::Navigate(PageId::Dashboard),
            "messages" | "m" => match parse_filter(rest, "/messages [YEAR [MONTH|all]]")? {
                Some((year, month)) => Action::FilterMessages { year, month },
                None => Action::Navigate(PageId::Messages),
            },
            "broadcasts" | "b" => match parse_filter(rest, "/broadcasts [YEAR [MONTH|all]]")? {
                Some((year, month)) => Action::FilterBroadcasts { year, month },
                None => Action::Navigate(PageId::Broadcasts),
            },
            "broadcast" => Action::OpenBroadcast(parse_id(rest, "/broadcast ID")?),
            "message" => Action::OpenMessage(parse_id(rest, "/message ID")?),
            "send" => {
                let (recipient, text) = split_word(rest);
                if recipient.is_empty() || text.is_empty() {
                    return Err(usage("/send RECIPIENT TEXT"));
                }
                Action::SendMessage {
                    recipient: recipient.to_string(),
                    text: text.to_string(),
                }
            }
            "bulk" => {
                let (recipients, text) = split_recipients(rest);
                if text.is_empty() {
                    return Err(usage("/bulk R1,R2,... TEXT"));
                }
                Action::SendBulk {
                    recipients: recipients.to_string(),
                    text: text.to_string(),
                }
            }
            "help" | "h" => Action::Help,
            "quit" | "exit" | "q" => Action::Quit,
            _ => {
                return Err(ClientError::InvalidInput(format!(
                    "Unknown command '/{command}'. Type /help for the list."
                )))
            }
        };

        return Ok(action);
    }
}
