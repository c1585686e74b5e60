use dioxus::prelude::*;
use dioxus_primitives::tooltip as prim;

pub use dioxus_primitives::ContentSide;

/// Hover/focus tooltip root. Visibility is owned by the primitive;
/// pass `default_open` to render it open initially.
#[component]
pub fn Tooltip(mut props: prim::TooltipProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "viz-tooltip", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Tooltip { ..props }
    }
}

#[component]
pub fn TooltipTrigger(mut props: prim::TooltipTriggerProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "viz-tooltip-trigger", None, false));

    rsx! {
        prim::TooltipTrigger { ..props }
    }
}

/// Overlay body holding supplementary text.
///
/// `max_width` is a CSS length capping the display width; without it the
/// content sizes to fit.
#[component]
pub fn TooltipContent(
    #[props(default = ContentSide::Top)] side: ContentSide,
    #[props(default)] max_width: Option<String>,
    children: Element,
) -> Element {
    let style = max_width.map(|width| format!("max-width: {width};"));

    rsx! {
        prim::TooltipContent { class: "viz-tooltip-content", side, style, {children} }
    }
}
