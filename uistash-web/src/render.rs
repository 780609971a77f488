use uistash_client::PreviewDoc;
use wasm_bindgen::JsValue;
use web_sys::{Element, ShadowRoot, ShadowRootInit, ShadowRootMode};

/// Scoped render target over one container element. Content rendered into
/// the shadow boundary cannot style the host page and the host page cannot
/// style it; the author's markup is injected as-is, without sanitization.
pub struct ScopedRenderTarget {
    shadow: ShadowRoot,
}

impl ScopedRenderTarget {
    /// Attaches an open shadow root to the container, or reuses the one a
    /// previous acquire created.
    pub fn acquire(container: &Element) -> Result<ScopedRenderTarget, JsValue> {
        let shadow = match container.shadow_root() {
            Some(shadow) => shadow,
            None => container.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))?,
        };
        Ok(ScopedRenderTarget { shadow })
    }

    /// Replaces the boundary's entire content with `doc`. Previous nodes
    /// are discarded wholesale rather than patched, so nothing of an
    /// earlier render (markup, styles, listeners) survives.
    pub fn render(&self, doc: &PreviewDoc) -> Result<(), JsValue> {
        self.shadow.set_inner_html("");

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;

        let style = document.create_element("style")?;
        style.set_text_content(Some(&doc.style_text));
        self.shadow.append_child(&style)?;

        let wrapper = document.create_element("div")?;
        wrapper.set_inner_html(&doc.markup);
        self.shadow.append_child(&wrapper)?;

        Ok(())
    }

    pub fn release(&self) {
        self.shadow.set_inner_html("");
    }
}
