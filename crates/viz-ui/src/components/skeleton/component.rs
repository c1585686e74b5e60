use dioxus::prelude::*;

/// A loading placeholder block with an animated pulse.
///
/// `bar_width` is applied inline so callers can size the block without a
/// dedicated class.
#[component]
pub fn Skeleton(
    #[props(default)] bar_width: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut base = vec![Attribute::new("class", "skeleton", None, false)];
    if let Some(width) = bar_width {
        base.push(Attribute::new("style", format!("width: {width};"), None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}
