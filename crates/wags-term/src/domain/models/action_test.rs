use super::*;
use crate::domain::services::loaders::parse_recipients;

#[test]
fn test_parses_login() {
    assert_eq!(
        Action::parse("/login alice k1").unwrap(),
        Action::Login {
            username: "alice".to_string(),
            key: "k1".to_string(),
        }
    );
}

#[test]
fn test_rejects_login_without_key() {
    let err = Action::parse("/login alice").unwrap_err();
    assert_eq!(
        err,
        ClientError::InvalidInput("Usage: /login USER KEY".to_string())
    );
}

#[test]
fn test_parses_navigation_aliases() {
    assert_eq!(
        Action::parse("/d").unwrap(),
        Action::Navigate(PageId::Dashboard)
    );
    assert_eq!(
        Action::parse("/messages").unwrap(),
        Action::Navigate(PageId::Messages)
    );
    assert_eq!(
        Action::parse("  /B  ").unwrap(),
        Action::Navigate(PageId::Broadcasts)
    );
}

#[test]
fn test_parses_filters() {
    assert_eq!(
        Action::parse("/messages 2024 5").unwrap(),
        Action::FilterMessages {
            year: 2024,
            month: Some(MonthFilter::Month(5)),
        }
    );
    assert_eq!(
        Action::parse("/broadcasts 2023 all").unwrap(),
        Action::FilterBroadcasts {
            year: 2023,
            month: Some(MonthFilter::All),
        }
    );
    assert_eq!(
        Action::parse("/m 2022").unwrap(),
        Action::FilterMessages {
            year: 2022,
            month: None,
        }
    );
}

#[test]
fn test_rejects_bad_filters() {
    assert!(Action::parse("/messages twenty").is_err());
    assert!(Action::parse("/messages 2024 13").is_err());
    assert!(Action::parse("/messages 2024 5 extra").is_err());
}

#[test]
fn test_parses_ids() {
    assert_eq!(Action::parse("/broadcast 42").unwrap(), Action::OpenBroadcast(42));
    assert_eq!(Action::parse("/message 7").unwrap(), Action::OpenMessage(7));
    assert!(Action::parse("/broadcast abc").is_err());
    assert!(Action::parse("/message").is_err());
}

#[test]
fn test_keeps_message_text_spacing() {
    assert_eq!(
        Action::parse("/send 628111   hello  there").unwrap(),
        Action::SendMessage {
            recipient: "628111".to_string(),
            text: "hello  there".to_string(),
        }
    );
}

#[test]
fn test_parses_bulk() {
    assert_eq!(
        Action::parse("/bulk 628111,628222 promo today").unwrap(),
        Action::SendBulk {
            recipients: "628111,628222".to_string(),
            text: "promo today".to_string(),
        }
    );
    assert!(Action::parse("/bulk 628111").is_err());
}

#[test]
fn test_parses_bulk_with_spaced_commas() {
    assert_eq!(
        Action::parse("/bulk 628111, 628222 promo text").unwrap(),
        Action::SendBulk {
            recipients: "628111, 628222".to_string(),
            text: "promo text".to_string(),
        }
    );
    assert_eq!(
        Action::parse("/bulk 628111 ,628222 , 628333 promo").unwrap(),
        Action::SendBulk {
            recipients: "628111 ,628222 , 628333".to_string(),
            text: "promo".to_string(),
        }
    );
    assert!(Action::parse("/bulk 628111, 628222,").is_err());

    match Action::parse("/bulk 628111, 628222 promo text").unwrap() {
        Action::SendBulk { recipients, .. } => assert_eq!(
            parse_recipients(&recipients),
            vec!["628111".to_string(), "628222".to_string()]
        ),
        other => panic!("unexpected action {other:?}"),
    }
}

#[test]
fn test_rejects_unknown_and_plain_text() {
    assert!(Action::parse("/dance").is_err());
    assert!(Action::parse("hello").is_err());
}

#[test]
fn test_parses_quit_and_help() {
    assert_eq!(Action::parse("/exit").unwrap(), Action::Quit);
    assert_eq!(Action::parse("/q").unwrap(), Action::Quit);
    assert_eq!(Action::parse("/h").unwrap(), Action::Help);
    assert!(help_text().starts_with("COMMANDS:"));
}
