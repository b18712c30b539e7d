use crate::store::FormProps;

/// Class applied to the link while subscribed
pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Pointer,
    /// A toggle request is outstanding
    Wait,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconView {
    pub data_icon: String,
    pub class: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub href: &'static str,
    pub class: String,
    pub title: String,
    pub cursor: Cursor,
    pub icon: IconView,
}

impl LinkView {
    pub fn is_active(&self) -> bool {
        self.class == ACTIVE_CLASS
    }

    /// Label as drawn: icon glyph in brackets, then the title
    pub fn label(&self) -> String {
        if self.icon.data_icon.is_empty() {
            self.title.clone()
        } else {
            format!("[{}] {}", self.icon.data_icon, self.title)
        }
    }
}

pub fn link_title(subscribed: bool, thing: &str) -> String {
    let action = if subscribed {
        "Unsubscribe from"
    } else {
        "Subscribe to"
    };
    format!("{} {}", action, thing)
}

/// Message for a successful toggle
pub fn confirmation_message(thing: &str, subscribed: bool, subscribed_to_tool: bool) -> String {
    if subscribed_to_tool {
        return format!(
            "You can't subscribe to this {} because you are already subscribed to the entire tool",
            thing
        );
    }
    let action = if subscribed {
        "subscribed to"
    } else {
        "unsubscribed from"
    };
    format!("Successfully {} this {}", action, thing)
}

/// Build the link view for the given props
pub fn render(props: &FormProps) -> LinkView {
    let title = link_title(props.subscribed, &props.thing);
    LinkView {
        href: "#",
        class: if props.subscribed {
            ACTIVE_CLASS.to_string()
        } else {
            String::new()
        },
        title: title.clone(),
        cursor: if props.in_progress {
            Cursor::Wait
        } else {
            Cursor::Pointer
        },
        icon: IconView {
            data_icon: props.icon.glyph.clone(),
            class: format!("ico {}", props.icon.css),
            title,
        },
    }
}

#[cfg(test)]
#[path = "form_view_tests.rs"]
mod form_view_tests;
