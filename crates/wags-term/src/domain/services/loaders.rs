//! Data loaders behind each view.
//!
//! Loaders return plain data and never touch the renderer. Apart from
//! [`years`], every loader reports failures as [`ClientError`]; a 401 has
//! already ended the session by the time the error comes back.

#[cfg(test)]
#[path = "loaders_test.rs"]
mod tests;

use chrono::Datelike;
use wags_types::Broadcast;
use wags_types::Message;
use wags_types::SendBulkRequest;
use wags_types::SendMessageRequest;

use super::SessionState;
use crate::domain::models::ClientError;
use crate::domain::models::Clock;
use crate::domain::models::DashboardStats;
use crate::domain::models::Period;
use crate::domain::models::YearsSelection;
use crate::infrastructure::clients::ApiClient;

pub const NO_RECIPIENTS_ERROR: &str = "Please enter at least one recipient";

/// Counters over the messages of the current calendar month.
pub async fn dashboard(
    api: &ApiClient,
    session: &mut SessionState,
    clock: &dyn Clock,
) -> Result<DashboardStats, ClientError> {
    let period = Period::containing(clock.today());
    let messages = api.messages(session, period).await?;

    return Ok(DashboardStats::from_messages(&messages));
}

pub async fn messages(
    api: &ApiClient,
    session: &mut SessionState,
    period: Period,
) -> Result<Vec<Message>, ClientError> {
    api.messages(session, period).await
}

pub async fn broadcasts(
    api: &ApiClient,
    session: &mut SessionState,
    period: Period,
) -> Result<Vec<Broadcast>, ClientError> {
    api.broadcasts(session, period).await
}

pub async fn broadcast_details(
    api: &ApiClient,
    session: &mut SessionState,
    broadcast_id: i64,
) -> Result<Vec<Message>, ClientError> {
    api.broadcast_details(session, broadcast_id).await
}

/// Years with data and the one the filters start on. Never fails: any error
/// falls back to the current year alone.
pub async fn years(api: &ApiClient, session: &mut SessionState, clock: &dyn Clock) -> YearsSelection {
    let current_year = clock.today().year();
    let selection = match api.years(session).await {
        Ok(years) => YearsSelection::new(years, current_year),
        Err(err) => {
            tracing::warn!(error = %err, current_year, "could not load years, using the current one");
            YearsSelection::fallback(current_year)
        }
    };

    session.set_available_years(selection.years.clone());
    return selection;
}

/// Splits the bulk recipients field. Entries are separated by newlines or
/// commas; blanks are dropped.
pub fn parse_recipients(text: &str) -> Vec<String> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Queues one message and returns its id.
pub async fn send_message(
    api: &ApiClient,
    session: &mut SessionState,
    clock: &dyn Clock,
    recipient: &str,
    text: &str,
) -> Result<i64, ClientError> {
    let recipient = recipient.trim();
    if recipient.is_empty() {
        return Err(ClientError::InvalidInput(
            "Please enter a recipient".to_string(),
        ));
    }

    let request = SendMessageRequest {
        recipient: recipient.to_string(),
        message: text.to_string(),
        dt_store: clock.timestamp(),
    };
    let response = api.send_message(session, &request).await?;
    tracing::info!(message_id = response.message_id, "message queued");

    return Ok(response.message_id);
}

/// Queues one message for many recipients and returns the broadcast id.
pub async fn send_bulk(
    api: &ApiClient,
    session: &mut SessionState,
    clock: &dyn Clock,
    recipients_text: &str,
    text: &str,
) -> Result<i64, ClientError> {
    let recipients = parse_recipients(recipients_text);
    if recipients.is_empty() {
        return Err(ClientError::InvalidInput(NO_RECIPIENTS_ERROR.to_string()));
    }

    let request = SendBulkRequest {
        recipients,
        message: text.to_string(),
        dt_store: clock.timestamp(),
    };
    let response = api.send_bulk(session, &request).await?;
    tracing::info!(
        bulk_message_id = response.bulk_message_id,
        recipients = request.recipients.len(),
        "broadcast queued"
    );

    return Ok(response.bulk_message_id);
}
