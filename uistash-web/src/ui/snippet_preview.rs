use uistash_client::PreviewDoc;
use yew::prelude::*;

use crate::render::ScopedRenderTarget;

#[derive(Clone, PartialEq, Properties)]
pub struct SnippetPreviewProps {
    pub markup: String,
    pub style: String,
}

/// Renders untrusted snippet source inside a style-isolated boundary.
/// Every input change discards the previous render wholesale; there is no
/// incremental patching, so no stale nodes or listeners can survive.
#[function_component(SnippetPreview)]
pub fn snippet_preview(p: &SnippetPreviewProps) -> Html {
    let container = use_node_ref();

    use_effect_with_deps(
        |(container, markup, style)| {
            let container = container
                .cast::<web_sys::Element>()
                .expect("preview container is not attached to an element");
            let doc = PreviewDoc::compose(markup, style);
            let target = ScopedRenderTarget::acquire(&container);
            match &target {
                Ok(target) => {
                    if let Err(e) = target.render(&doc) {
                        tracing::error!(?e, "failed rendering snippet preview");
                    }
                }
                Err(e) => tracing::error!(?e, "failed acquiring scoped render target"),
            }
            move || {
                if let Ok(target) = target {
                    target.release();
                }
            }
        },
        (container.clone(), p.markup.clone(), p.style.clone()),
    );

    html! {
        <div ref={ container } class="snippet-preview"></div>
    }
}
