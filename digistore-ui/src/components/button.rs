//! Reusable button component

use dioxus::prelude::*;

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Solid brand background - for primary actions
    Primary,
    /// Bordered, transparent background
    Outline,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Compact header controls
    Small,
    /// Standard padding
    Medium,
    /// Hero and section calls to action
    Large,
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base = "inline-flex items-center justify-center gap-2 rounded-md font-medium transition-colors";

    let padding = match size {
        ButtonSize::Small => "h-9 px-3 text-sm",
        ButtonSize::Medium => "h-10 px-4 py-2 text-sm",
        ButtonSize::Large => "h-11 px-8 text-lg",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => "bg-indigo-600 hover:bg-indigo-500 text-white",
        ButtonVariant::Outline => "border border-gray-300 bg-white hover:bg-gray-100 text-gray-900",
    };

    let computed_class = match &class {
        Some(extra) => format!("{base} {padding} {variant_class} {extra}"),
        None => format!("{base} {padding} {variant_class}"),
    };

    rsx! {
        button {
            class: "{computed_class}",
            r#type: "button",
            aria_label: aria_label.as_deref(),
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
