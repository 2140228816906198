use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Current build in the party string format, offered for copying.
    pub export_text: AttrValue,
    #[prop_or_default]
    pub on_import: Callback<String>,
}

#[function_component(ImportPanel)]
pub fn import_panel(p: &Props) -> Html {
    let draft = use_state(String::new);
    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
            {
                draft.set(area.value());
            }
        })
    };
    let on_submit = {
        let draft = draft.clone();
        let cb = p.on_import.clone();
        Callback::from(move |_| {
            if !draft.trim().is_empty() {
                cb.emit((*draft).clone());
            }
        })
    };
    html! {
        <section class="import-panel">
            <label for="import-text">{ "Import party string" }</label>
            <textarea id="import-text" rows="8" value={(*draft).clone()} oninput={on_input} />
            <button id="import-btn" onclick={on_submit}>{ "Import" }</button>
            <label for="export-text">{ "Export" }</label>
            <textarea id="export-text" rows="8" readonly=true value={p.export_text.clone()} />
        </section>
    }
}
