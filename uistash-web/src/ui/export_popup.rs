use uistash_client::Framework;
use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct ExportPopupProps {
    pub framework: Framework,
    pub code: String,
    pub on_close: Callback<()>,
}

#[function_component(ExportPopup)]
pub fn export_popup(p: &ExportPopupProps) -> Html {
    let copied = use_state(|| false);

    let on_copy = {
        let copied = copied.clone();
        let code = p.code.clone();
        Callback::from(move |_| {
            util::copy_text(&code);
            copied.set(true);
        })
    };

    html! {
        <div class="popup-overlay">
            <div class="export-popup">
                <div class="export-popup-header">
                    <h3>{ format!("Export – {} Code", p.framework.label()) }</h3>
                    <button
                        type="button"
                        class="export-popup-close"
                        onclick={ p.on_close.reform(|_| ()) }
                    >
                        { "✖" }
                    </button>
                </div>
                <pre class="export-popup-code"><code>{ &p.code }</code></pre>
                <div class="export-popup-footer">
                    <button type="button" class="export-popup-btn" onclick={ on_copy }>
                        { if *copied { "✅ Copied!" } else { "📋 Copy code" } }
                    </button>
                    <button
                        type="button"
                        class="export-popup-btn"
                        onclick={ p.on_close.reform(|_| ()) }
                    >
                        { "Close" }
                    </button>
                </div>
            </div>
        </div>
    }
}
