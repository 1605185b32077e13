use chrono::Datelike;
use wags_types::Message;

use super::loaders;
use super::SessionState;
use crate::domain::models::help_text;
use crate::domain::models::Action;
use crate::domain::models::ClientError;
use crate::domain::models::ClockBox;
use crate::domain::models::CredentialStoreBox;
use crate::domain::models::MonthFilter;
use crate::domain::models::PageId;
use crate::domain::models::Period;
use crate::domain::models::Region;
use crate::domain::models::RendererBox;
use crate::domain::models::SendKind;
use crate::domain::models::SendOutcome;
use crate::domain::models::View;
use crate::infrastructure::clients::ApiClient;

#[cfg(test)]
#[path = "view_controller_test.rs"]
mod tests;

const LOGIN_NETWORK_ERROR: &str = "Network error. Please try again.";
const LOGIN_REQUIRED: &str = "Please /login first.";

pub struct ViewControllerProps {
    pub api_client: ApiClient,
    pub credential_store: CredentialStoreBox,
    pub renderer: RendererBox,
    pub clock: ClockBox,
}

/// Decides which region and page are visible and runs the loaders behind
/// them.
///
/// Handlers run one at a time and each one owns the session for its whole
/// duration, so a response can never land on a page the user already left.
/// The visible region follows the session: once a request ends the session,
/// the next sync switches back to the login view.
pub struct ViewController {
    api: ApiClient,
    session: SessionState,
    renderer: RendererBox,
    clock: ClockBox,
    region: Region,
    login_error: Option<String>,
    messages_filter: Period,
    broadcasts_filter: Period,
    last_messages: Vec<Message>,
}

impl ViewController {
    pub fn new(props: ViewControllerProps) -> ViewController {
        let period = Period::containing(props.clock.today());

        return ViewController {
            api: props.api_client,
            session: SessionState::new(props.credential_store),
            renderer: props.renderer,
            clock: props.clock,
            region: Region::Login,
            login_error: None,
            messages_filter: period,
            broadcasts_filter: period,
            last_messages: vec![],
        };
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    pub fn messages_filter(&self) -> Period {
        self.messages_filter
    }

    pub fn broadcasts_filter(&self) -> Period {
        self.broadcasts_filter
    }

    /// Pages currently on screen. Empty on the login view, a single page
    /// otherwise.
    pub fn visible_pages(&self) -> Vec<PageId> {
        match self.region {
            Region::Login => vec![],
            Region::Main => vec![self.session.current_page()],
        }
    }

    pub async fn on_startup(&mut self) {
        if self.session.restore() {
            self.enter_main().await;
        } else {
            self.region = Region::Login;
            self.renderer.show_login(None);
        }
    }

    pub async fn on_login(&mut self, username: &str, key: &str) {
        let username = username.trim();
        if username.is_empty() || key.is_empty() {
            self.reject_login("Please enter your username and API key.".to_string());
            return;
        }

        match self.api.login(username, key).await {
            Ok(credential) => {
                self.session.begin_session(credential);
                self.login_error = None;
                self.enter_main().await;
            }
            Err(ClientError::Network(_)) => self.reject_login(LOGIN_NETWORK_ERROR.to_string()),
            Err(err) => self.reject_login(err.to_string()),
        }
    }

    fn reject_login(&mut self, error: String) {
        self.region = Region::Login;
        self.renderer.show_login(Some(&error));
        self.login_error = Some(error);
    }

    pub fn on_logout(&mut self) {
        self.session.end_session();
        self.show_login_region();
    }

    fn show_login_region(&mut self) {
        self.region = Region::Login;
        self.login_error = None;
        self.last_messages.clear();
        self.renderer.show_login(None);
    }

    async fn enter_main(&mut self) {
        self.region = Region::Main;
        if let Some(username) = self.session.username() {
            self.renderer.show_main(username);
        }

        if self.navigate_to(PageId::Dashboard).await.is_ok() && self.session.is_authenticated() {
            self.load_years().await;
        }
    }

    /// Shows `page`, hides every other page and runs the page's loader once.
    pub async fn navigate_to(&mut self, page: PageId) -> Result<(), ClientError> {
        self.session.set_page(page)?;
        self.renderer.show_page(page, &page.others());

        let view = View::from(page);
        self.renderer.loading(view, true);
        let res = match page {
            PageId::Dashboard => self.load_dashboard().await,
            PageId::Messages => self.load_messages().await,
            PageId::Broadcasts => self.load_broadcasts().await,
        };
        if let Err(err) = res {
            self.renderer.load_error(view, &err);
        }
        self.renderer.loading(view, false);

        self.sync_region();
        return Ok(());
    }

    pub async fn apply_messages_filter(&mut self, period: Period) -> Result<(), ClientError> {
        self.messages_filter = period;
        self.navigate_to(PageId::Messages).await
    }

    pub async fn apply_broadcasts_filter(&mut self, period: Period) -> Result<(), ClientError> {
        self.broadcasts_filter = period;
        self.navigate_to(PageId::Broadcasts).await
    }

    pub async fn open_broadcast(&mut self, broadcast_id: i64) {
        self.renderer.loading(View::BroadcastDetails, true);
        match loaders::broadcast_details(&self.api, &mut self.session, broadcast_id).await {
            Ok(messages) => {
                self.renderer.broadcast_details(broadcast_id, &messages);
                self.last_messages = messages;
            }
            Err(err) => self.renderer.load_error(View::BroadcastDetails, &err),
        }
        self.renderer.loading(View::BroadcastDetails, false);
        self.sync_region();
    }

    /// Shows one message of the last rendered table.
    pub fn open_message(&mut self, message_id: i64) {
        match self.last_messages.iter().find(|m| m.id == message_id) {
            Some(message) => self.renderer.message_details(message),
            None => self.renderer.notice(&format!(
                "Message {message_id} is not in the last listed table."
            )),
        }
    }

    /// Queues one message. The outcome, success or failure, goes to the
    /// renderer.
    pub async fn send_message(&mut self, recipient: &str, text: &str) {
        let result = loaders::send_message(
            &self.api,
            &mut self.session,
            self.clock.as_ref(),
            recipient,
            text,
        )
        .await
        .map(SendOutcome::Message);

        self.renderer.send_result(SendKind::Message, &result);
        self.sync_region();
    }

    pub async fn send_bulk(&mut self, recipients: &str, text: &str) {
        let result = loaders::send_bulk(
            &self.api,
            &mut self.session,
            self.clock.as_ref(),
            recipients,
            text,
        )
        .await
        .map(SendOutcome::Bulk);

        self.renderer.send_result(SendKind::Bulk, &result);
        self.sync_region();
    }

    /// Routes one parsed action. `Quit` is left to the caller.
    pub async fn dispatch(&mut self, action: Action) {
        match action {
            Action::Help => {
                self.renderer.notice(&help_text());
                return;
            }
            Action::Quit => return,
            Action::Login { username, key } => {
                match self.session.username() {
                    Some(current) => {
                        let text = format!("Already logged in as {current}. Use /logout first.");
                        self.renderer.notice(&text);
                    }
                    None => self.on_login(&username, &key).await,
                }
                return;
            }
            _ => {}
        }

        if !self.session.is_authenticated() {
            self.renderer.notice(LOGIN_REQUIRED);
            return;
        }

        let res = match action {
            Action::Logout => {
                self.on_logout();
                Ok(())
            }
            Action::Navigate(page) => self.navigate_to(page).await,
            Action::FilterMessages { year, month } => {
                let period = self.period_for(year, month, self.messages_filter);
                self.apply_messages_filter(period).await
            }
            Action::FilterBroadcasts { year, month } => {
                let period = self.period_for(year, month, self.broadcasts_filter);
                self.apply_broadcasts_filter(period).await
            }
            Action::OpenBroadcast(id) => {
                self.open_broadcast(id).await;
                Ok(())
            }
            Action::OpenMessage(id) => {
                self.open_message(id);
                Ok(())
            }
            Action::SendMessage { recipient, text } => {
                self.send_message(&recipient, &text).await;
                Ok(())
            }
            Action::SendBulk { recipients, text } => {
                self.send_bulk(&recipients, &text).await;
                Ok(())
            }
            Action::Help | Action::Quit | Action::Login { .. } => Ok(()),
        };

        if let Err(err) = res {
            self.renderer.notice(&err.to_string());
        }
    }

    pub fn notice(&mut self, text: &str) {
        self.renderer.notice(text);
    }

    pub fn prompt(&mut self) {
        let page = self
            .session
            .is_authenticated()
            .then(|| self.session.current_page());
        self.renderer.prompt(self.session.username(), page);
    }

    fn period_for(&self, year: i32, month: Option<MonthFilter>, current: Period) -> Period {
        Period {
            year,
            month: month.unwrap_or(current.month),
        }
    }

    async fn load_dashboard(&mut self) -> Result<(), ClientError> {
        let stats = loaders::dashboard(&self.api, &mut self.session, self.clock.as_ref()).await?;
        self.renderer.dashboard(&stats);
        return Ok(());
    }

    async fn load_messages(&mut self) -> Result<(), ClientError> {
        let messages = loaders::messages(&self.api, &mut self.session, self.messages_filter).await?;
        self.renderer.messages(&messages);
        self.last_messages = messages;
        return Ok(());
    }

    async fn load_broadcasts(&mut self) -> Result<(), ClientError> {
        let broadcasts =
            loaders::broadcasts(&self.api, &mut self.session, self.broadcasts_filter).await?;
        self.renderer.broadcasts(&broadcasts);
        return Ok(());
    }

    async fn load_years(&mut self) {
        let selection = loaders::years(&self.api, &mut self.session, self.clock.as_ref()).await;
        self.renderer.years(&selection);

        if let Some(year) = selection.default {
            let month = self.clock.today().month();
            self.messages_filter = Period::new(year, month);
            self.broadcasts_filter = Period::new(year, month);
        }

        self.sync_region();
    }

    // A 401 anywhere ends the session inside the client.
    fn sync_region(&mut self) {
        if self.region == Region::Main && !self.session.is_authenticated() {
            tracing::debug!("session ended by the server, back to login");
            self.show_login_region();
        }
    }
}
