//! Button Components
//!
//! Pill buttons in the plum accent:
//! - Start: "시작하기" on the landing screen
//! - Refresh: "다른 문장 보기" under the quote card

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Large landing-screen call to action
    Start,
    /// Secondary pill under the card
    #[default]
    Refresh,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Start => "btn-start",
            ButtonVariant::Refresh => "btn-refresh",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
}

/// Styled pill button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Start,
///         onclick: move |_| navigator.push(Route::Reader {}),
///         "시작하기"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: props.variant.class(),
            r#type: "button",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Start.class(), "btn-start");
        assert_eq!(ButtonVariant::Refresh.class(), "btn-refresh");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Refresh);
    }
}
