use dioxus::prelude::*;
use viz_types::SkeletonCaptionSize;

use crate::components::skeleton::Skeleton;
use crate::components::skeleton_caption::SkeletonCaption;

/// Loading shell of a visualization: a caption header over a chart body.
///
/// `chart` replaces the generic pulsing block when a chart-shaped skeleton
/// is available.
#[component]
pub fn VisualizationSkeleton(
    #[props(default)] name: Option<String>,
    #[props(default)] description: Option<String>,
    #[props(default)] action_menu: Option<Element>,
    #[props(default)] caption_size: SkeletonCaptionSize,
    #[props(default)] chart: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "visualization-skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let body =
        chart.unwrap_or_else(|| rsx! { Skeleton { class: "visualization-skeleton-chart" } });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            SkeletonCaption {
                name,
                description,
                action_menu,
                size: caption_size,
            }
            div { class: "visualization-skeleton-body", {body} }
        }
    }
}
