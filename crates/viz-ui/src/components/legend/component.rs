use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdInfo;
use dioxus_free_icons::Icon;
use viz_types::SkeletonConfig;

use crate::components::tooltip::{ContentSide, Tooltip, TooltipContent, TooltipTrigger};

/// Right-aligned trailing area of a legend or caption header.
#[component]
pub fn LegendRightContent(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "legend-right-content", {children} }
    }
}

/// Small "info" glyph used as a description trigger.
#[component]
pub fn LegendDescriptionIcon() -> Element {
    rsx! {
        span { class: "legend-description-icon", "aria-hidden": "true",
            Icon { icon: LdInfo, width: 14, height: 14 }
        }
    }
}

/// Info icon that reveals `description` in a tooltip.
///
/// The tooltip body is capped at `max_width`, or at the configured
/// [`SkeletonConfig::description_max_width`] when none is given.
#[component]
pub fn LegendDescriptionTooltip(
    description: String,
    #[props(default)] max_width: Option<String>,
    #[props(default)] default_open: bool,
) -> Element {
    let config = try_use_context::<SkeletonConfig>().unwrap_or_default();
    let max_width = max_width.unwrap_or(config.description_max_width);

    rsx! {
        Tooltip { default_open,
            TooltipTrigger { aria_label: "More info",
                LegendDescriptionIcon {}
            }
            TooltipContent { side: ContentSide::Top, max_width,
                "{description}"
            }
        }
    }
}
