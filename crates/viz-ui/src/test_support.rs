use dioxus::prelude::*;

/// Render a root component to HTML.
pub fn render(app: fn() -> Element) -> String {
    render_dom(VirtualDom::new(app))
}

/// Render a prepared virtual DOM to HTML.
pub fn render_dom(mut dom: VirtualDom) -> String {
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
