//! Tests for form/form_view

use proptest::prelude::*;

use super::*;
use crate::options::Icon;
use crate::store::ViewState;

fn props(thing: &str, subscribed: bool, in_progress: bool) -> FormProps {
    ViewState {
        thing: thing.to_string(),
        subscribed,
        subscribed_to_tool: false,
        url: "/sub".to_string(),
        icon: Icon {
            glyph: "M".to_string(),
            css: "fa-envelope".to_string(),
        },
        in_progress,
    }
}

#[test]
fn test_unsubscribed_link() {
    let view = render(&props("ticket", false, false));

    assert_eq!(view.href, "#");
    assert_eq!(view.title, "Subscribe to ticket");
    assert_eq!(view.class, "");
    assert!(!view.is_active());
    assert_eq!(view.cursor, Cursor::Pointer);
}

#[test]
fn test_subscribed_link_is_active() {
    let view = render(&props("ticket", true, false));

    assert_eq!(view.title, "Unsubscribe from ticket");
    assert_eq!(view.class, ACTIVE_CLASS);
    assert!(view.is_active());
}

#[test]
fn test_in_progress_shows_wait_cursor() {
    let view = render(&props("ticket", false, true));
    assert_eq!(view.cursor, Cursor::Wait);
}

#[test]
fn test_icon_carries_glyph_class_and_title() {
    let view = render(&props("thread", true, false));

    assert_eq!(view.icon.data_icon, "M");
    assert_eq!(view.icon.class, "ico fa-envelope");
    assert_eq!(view.icon.title, "Unsubscribe from thread");
}

#[test]
fn test_label_includes_glyph() {
    let view = render(&props("ticket", false, false));
    assert_eq!(view.label(), "[M] Subscribe to ticket");

    let mut bare = props("ticket", false, false);
    bare.icon = Icon::default();
    assert_eq!(render(&bare).label(), "Subscribe to ticket");
}

#[test]
fn test_confirmation_messages() {
    assert_eq!(
        confirmation_message("ticket", true, false),
        "Successfully subscribed to this ticket"
    );
    assert_eq!(
        confirmation_message("ticket", false, false),
        "Successfully unsubscribed from this ticket"
    );
    assert_eq!(
        confirmation_message("ticket", true, true),
        "You can't subscribe to this ticket because you are already subscribed to the entire tool"
    );
}

// **Feature: subscription-form, Property 1: Title follows subscription**
// *For any* thing, the title is "Subscribe to <thing>" when unsubscribed and
// "Unsubscribe from <thing>" when subscribed.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_title_follows_subscription(
        thing in "[a-zA-Z][a-zA-Z ]{0,20}",
        subscribed in any::<bool>(),
        in_progress in any::<bool>(),
    ) {
        let view = render(&props(&thing, subscribed, in_progress));

        let expected = if subscribed {
            format!("Unsubscribe from {}", thing)
        } else {
            format!("Subscribe to {}", thing)
        };
        prop_assert_eq!(&view.title, &expected);
        prop_assert_eq!(view.is_active(), subscribed);
    }
}

// **Feature: subscription-form, Property 2: Tool subscription wins**
// *For any* returned subscription flag, a tool-level subscription yields the
// "entire tool" message.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_tool_subscription_message(
        thing in "[a-z]{1,12}",
        subscribed in any::<bool>(),
    ) {
        let message = confirmation_message(&thing, subscribed, true);
        prop_assert!(message.contains("already subscribed to the entire tool"));
        prop_assert!(message.contains(&thing));
    }
}
