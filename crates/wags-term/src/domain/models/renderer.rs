use wags_types::Broadcast;
use wags_types::Message;

use super::ClientError;
use super::DashboardStats;
use super::PageId;
use super::SendKind;
use super::SendOutcome;
use super::View;
use super::YearsSelection;

/// Paints what the view controller produces. Implementations receive plain
/// data and never call back into the session layer.
pub trait Renderer: Send {
    fn show_login(&mut self, error: Option<&str>);
    fn show_main(&mut self, username: &str);
    fn show_page(&mut self, visible: PageId, hidden: &[PageId]);
    fn loading(&mut self, view: View, active: bool);
    fn dashboard(&mut self, stats: &DashboardStats);
    fn messages(&mut self, messages: &[Message]);
    fn broadcasts(&mut self, broadcasts: &[Broadcast]);
    fn broadcast_details(&mut self, broadcast_id: i64, messages: &[Message]);
    fn message_details(&mut self, message: &Message);
    fn years(&mut self, selection: &YearsSelection);
    fn load_error(&mut self, view: View, error: &ClientError);
    fn send_result(&mut self, kind: SendKind, result: &Result<SendOutcome, ClientError>);
    fn notice(&mut self, text: &str);

    /// Called whenever the controller is idle and waiting for input.
    fn prompt(&mut self, _username: Option<&str>, _page: Option<PageId>) {}
}

pub type RendererBox = Box<dyn Renderer>;
