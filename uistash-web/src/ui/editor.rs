use uistash_client::{
    api::{NewSnippet, SnippetSource, SnippetStatus, CATEGORIES},
    Framework, Template,
};
use yew::prelude::*;

use crate::{api, session::Session, ui};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SourceTab {
    Markup,
    Style,
}

#[derive(Clone, PartialEq, Properties)]
pub struct EditorProps {
    pub session: Session,
    pub on_done: Callback<()>,
    pub on_back: Callback<()>,
}

pub enum EditorMsg {
    PickCategory(String),
    ConfirmCategory,
    ReopenPicker,
    TitleChanged(String),
    MarkupChanged(String),
    StyleChanged(String),
    SetTab(SourceTab),
    Submit(SnippetStatus),
    SubmitDone,
    SubmitFailed(String),
}

/// Submission editor: pick a category (pre-filling its starter template),
/// edit markup/style with a live isolated preview on every keystroke, then
/// save as draft or submit for review.
pub struct Editor {
    title: String,
    markup: String,
    style: String,
    active_tab: SourceTab,
    category: Option<String>,
    pending_category: Option<String>,
    picker_open: bool,
    submitting: bool,
    error: Option<String>,
}

impl Component for Editor {
    type Message = EditorMsg;
    type Properties = EditorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Editor {
            title: String::new(),
            markup: String::new(),
            style: String::new(),
            active_tab: SourceTab::Markup,
            category: None,
            pending_category: None,
            picker_open: true,
            submitting: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            EditorMsg::PickCategory(c) => self.pending_category = Some(c),
            EditorMsg::ConfirmCategory => {
                let Some(category) = self.pending_category.clone() else {
                    return false;
                };
                if let Some(template) = Template::for_category(&category) {
                    self.title = template.title.to_string();
                    self.markup = template.markup.to_string();
                    self.style = template.style.to_string();
                }
                self.category = Some(category);
                self.picker_open = false;
            }
            EditorMsg::ReopenPicker => self.picker_open = true,
            EditorMsg::TitleChanged(t) => self.title = t,
            EditorMsg::MarkupChanged(m) => self.markup = m,
            EditorMsg::StyleChanged(s) => self.style = s,
            EditorMsg::SetTab(tab) => self.active_tab = tab,
            EditorMsg::Submit(status) => {
                if self.submitting {
                    return false;
                }
                let Some(category) = self.category.clone() else {
                    self.error = Some("Pick a component type first.".to_string());
                    return true;
                };
                let source = SnippetSource {
                    markup: self.markup.clone(),
                    style: self.style.clone(),
                };
                let snippet = NewSnippet {
                    title: match self.title.is_empty() {
                        true => category.clone(),
                        false => self.title.clone(),
                    },
                    react_code: Framework::React.generate(&source),
                    vue_code: Framework::Vue.generate(&source),
                    svelte_code: Framework::Svelte.generate(&source),
                    lit_code: Framework::Lit.generate(&source),
                    category,
                    status,
                    account_id: ctx.props().session.account_id.clone(),
                    source,
                };
                self.submitting = true;
                self.error = None;
                let session = ctx.props().session.clone();
                ctx.link().send_future(async move {
                    match api::submit_snippet(&session, &snippet).await {
                        Ok(()) => EditorMsg::SubmitDone,
                        Err(e) => EditorMsg::SubmitFailed(e.to_string()),
                    }
                });
            }
            EditorMsg::SubmitDone => {
                ctx.props().on_done.emit(());
                return false;
            }
            EditorMsg::SubmitFailed(msg) => {
                self.submitting = false;
                self.error = Some(msg);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let picker = self.picker_open.then(|| self.picker_view(ctx));

        let tab_button = |tab: SourceTab, label: &'static str| {
            let active = (self.active_tab == tab).then(|| "tab-active");
            html! {
                <button
                    type="button"
                    class={ classes!("tab-button", active) }
                    onclick={ ctx.link().callback(move |_| EditorMsg::SetTab(tab)) }
                >
                    { label }
                </button>
            }
        };

        let editor_area = match self.active_tab {
            SourceTab::Markup => html! {
                <textarea
                    class="code-editor"
                    value={ self.markup.clone() }
                    oninput={ ctx.link().callback(|e: InputEvent| {
                        let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                        EditorMsg::MarkupChanged(area.value())
                    }) }
                />
            },
            SourceTab::Style => html! {
                <textarea
                    class="code-editor"
                    value={ self.style.clone() }
                    oninput={ ctx.link().callback(|e: InputEvent| {
                        let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                        EditorMsg::StyleChanged(area.value())
                    }) }
                />
            },
        };

        html! {
            <div class="editor-page">
                <button
                    type="button"
                    class="back-link"
                    onclick={ ctx.props().on_back.reform(|_| ()) }
                >
                    { "⬅ Back to the list" }
                </button>
                <h1>{ "Create a New Element" }</h1>
                { for picker }
                <div class="detail-row">
                    <div class="detail-preview">
                        <ui::SnippetPreview
                            markup={ self.markup.clone() }
                            style={ self.style.clone() }
                        />
                    </div>
                    <div class="detail-code-viewer">
                        <div class="form-group">
                            <label>{ "Title" }</label>
                            <input
                                type="text"
                                value={ self.title.clone() }
                                placeholder="e.g. Button Gradient"
                                oninput={ ctx.link().callback(|e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    EditorMsg::TitleChanged(input.value())
                                }) }
                            />
                        </div>
                        <div class="tabs">
                            <div class="tabs-header">
                                { tab_button(SourceTab::Markup, "HTML") }
                                { tab_button(SourceTab::Style, "CSS") }
                            </div>
                            <div class="tabs-content">
                                { editor_area }
                            </div>
                        </div>
                        { for self.error.as_ref().map(|e| html! {
                            <div class="form-error">{ e }</div>
                        }) }
                    </div>
                </div>
                <div class="form-actions">
                    <button
                        type="button"
                        class="action-btn secondary"
                        onclick={ ctx.link().callback(|_| EditorMsg::ReopenPicker) }
                    >
                        { "Change type" }
                    </button>
                    <button
                        type="button"
                        class="action-btn secondary"
                        disabled={ self.submitting }
                        onclick={ ctx.link().callback(|_| EditorMsg::Submit(SnippetStatus::Draft)) }
                    >
                        { "Save as a draft" }
                    </button>
                    <button
                        type="button"
                        class="action-btn primary"
                        disabled={ self.submitting }
                        onclick={ ctx.link().callback(|_| EditorMsg::Submit(SnippetStatus::Review)) }
                    >
                        { if self.submitting { "Submitting..." } else { "Submit for review" } }
                    </button>
                </div>
            </div>
        }
    }
}

impl Editor {
    fn picker_view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="popup-overlay">
                <div class="popup-modern">
                    <div class="popup-header">
                        <h2>{ "Pick a component type" }</h2>
                    </div>
                    <div class="popup-grid">
                        { for CATEGORIES.iter().map(|c| {
                            let selected = (self.pending_category.as_deref() == Some(*c))
                                .then(|| "selected");
                            let category = c.to_string();
                            html! {
                                <div
                                    class={ classes!("popup-item", selected) }
                                    onclick={ ctx.link().callback(move |_| {
                                        EditorMsg::PickCategory(category.clone())
                                    }) }
                                >
                                    <span>{ *c }</span>
                                </div>
                            }
                        }) }
                    </div>
                    <div class="popup-footer">
                        <button
                            type="button"
                            class="continue-btn"
                            disabled={ self.pending_category.is_none() }
                            onclick={ ctx.link().callback(|_| EditorMsg::ConfirmCategory) }
                        >
                            { "Continue" }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
