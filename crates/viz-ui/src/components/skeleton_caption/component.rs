use dioxus::prelude::*;
use viz_types::{SkeletonCaptionSize, SkeletonConfig};

use crate::components::legend::{LegendDescriptionTooltip, LegendRightContent};
use crate::components::skeleton::Skeleton;

/// Caption header of a loading visualization.
///
/// Renders the title when `name` is non-empty and a placeholder bar otherwise,
/// followed by a right-aligned area holding the description tooltip (when
/// `description` is non-empty) and the `action_menu` slot.
#[component]
pub fn SkeletonCaption(
    #[props(default)] name: Option<String>,
    #[props(default)] description: Option<String>,
    #[props(default)] action_menu: Option<Element>,
    #[props(default)] size: SkeletonCaptionSize,
    #[props(default)] class: Option<String>,
) -> Element {
    let config = try_use_context::<SkeletonConfig>().unwrap_or_default();
    let name = name.filter(|n| !n.is_empty());
    let description = description.filter(|d| !d.is_empty());

    tracing::trace!(
        %size,
        placeholder = name.is_none(),
        has_description = description.is_some(),
        has_action_menu = action_menu.is_some(),
        "rendering skeleton caption"
    );

    let class = match class {
        Some(extra) => format!("skeleton-caption {extra}"),
        None => "skeleton-caption".to_string(),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class,
            if let Some(name) = name {
                SkeletonCaptionTitle { size, "{name}" }
            } else {
                Skeleton {
                    class: "skeleton-caption-placeholder",
                    bar_width: config.placeholder_width.clone(),
                }
            }
            LegendRightContent {
                if let Some(description) = description {
                    LegendDescriptionTooltip { description }
                }
                {action_menu}
            }
        }
    }
}

/// Caption title, sized by `size`.
#[component]
pub fn SkeletonCaptionTitle(
    #[props(default)] size: SkeletonCaptionSize,
    children: Element,
) -> Element {
    rsx! {
        h3 { class: "skeleton-caption-title", "data-size": size.as_str(), {children} }
    }
}

/// Secondary caption text.
#[component]
pub fn SkeletonCaptionDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "skeleton-caption-description", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        p {
            ..merged,
            {children}
        }
    }
}
