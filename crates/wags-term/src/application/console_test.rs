use super::*;

fn message(id: i64, status: MessageStatus, dt_send: Option<&str>) -> Message {
    Message {
        id,
        recipient: "628111".to_string(),
        status,
        broadcast_message: "NO".to_string(),
        dt_store: "15-05-24 10:00:00".to_string(),
        dt_queue: "15-05-24 10:00:01".to_string(),
        dt_send: dt_send.map(str::to_string),
        message: "hello there".to_string(),
    }
}

fn render(f: impl FnOnce(&mut ConsoleRenderer<Vec<u8>>)) -> String {
    let mut renderer = ConsoleRenderer::new(vec![], false);
    f(&mut renderer);
    String::from_utf8(renderer.into_inner()).unwrap()
}

#[test]
fn test_renders_empty_tables() {
    let out = render(|r| {
        r.messages(&[]);
        r.broadcasts(&[]);
        r.broadcast_details(3, &[]);
    });

    assert_eq!(
        out,
        "No messages found\nNo broadcasts found\nBroadcast 3\nNo messages found for this broadcast\n"
    );
}

#[test]
fn test_renders_a_message_table() {
    let out = render(|r| {
        r.messages(&[
            message(1, MessageStatus::Sent, Some("15-05-24 10:00:05")),
            message(2, MessageStatus::Pending, None),
        ])
    });

    let lines = out.lines().collect::<Vec<&str>>();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ID"));
    assert!(lines[0].contains("BROADCAST"));
    assert!(lines[1].starts_with("1 "));
    assert!(lines[1].contains("SENT"));
    assert!(lines[1].ends_with("15-05-24 10:00:05"));
    assert!(lines[2].contains("PENDING"));
    assert!(lines[2].ends_with('-'));
}

#[test]
fn test_renders_message_details() {
    let out = render(|r| r.message_details(&message(9, MessageStatus::Failed, None)));

    assert!(out.starts_with("Message 9\n"));
    assert!(out.contains("Status:    FAILED"));
    assert!(out.contains("Sent:      -"));
    assert!(out.contains("Message:   hello there"));
}

#[test]
fn test_renders_send_results() {
    let out = render(|r| {
        r.send_result(SendKind::Message, &Ok(SendOutcome::Message(12)));
        r.send_result(SendKind::Bulk, &Ok(SendOutcome::Bulk(4)));
        r.send_result(
            SendKind::Bulk,
            &Err(ClientError::InvalidInput(
                "Please enter at least one recipient".to_string(),
            )),
        );
        r.send_result(SendKind::Message, &Err(ClientError::api("Invalid request body")));
        r.send_result(SendKind::Bulk, &Err(ClientError::SessionExpired));
    });

    assert_eq!(
        out.lines().collect::<Vec<&str>>(),
        vec![
            "Message queued successfully with ID: 12",
            "Bulk message queued successfully with ID: 4",
            "Please enter at least one recipient",
            "Error sending message: Invalid request body",
            "Error sending bulk message: Session expired. Please login again.",
        ]
    );
}

#[test]
fn test_renders_load_errors_and_years() {
    let out = render(|r| {
        r.load_error(View::BroadcastDetails, &ClientError::api("Access denied"));
        r.years(&YearsSelection::new(vec![2024, 2023], 2024));
        r.years(&YearsSelection::default());
    });

    assert_eq!(
        out.lines().collect::<Vec<&str>>(),
        vec![
            "Error loading broadcast details: Access denied",
            "Years with data: 2024, 2023 (filters start on 2024)",
            "No years with data yet",
        ]
    );
}

#[test]
fn test_prompts_with_the_session() {
    let out = render(|r| {
        r.prompt(None, None);
        r.prompt(Some("alice"), Some(PageId::Messages));
    });

    assert_eq!(out, "wags> alice@messages> ");
}

#[test]
fn test_colors_statuses_when_enabled() {
    let mut renderer = ConsoleRenderer::new(vec![], true);
    renderer.dashboard(&DashboardStats {
        total: 3,
        sent: 2,
        failed: 1,
    });
    let out = String::from_utf8(renderer.into_inner()).unwrap();

    assert!(out.contains("Total messages: 3"));
    assert!(out.contains('\u{1b}'));
}
