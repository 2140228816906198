use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub names: Vec<AttrValue>,
    #[prop_or_default]
    pub selected: Option<AttrValue>,
    #[prop_or_default]
    pub on_change: Callback<Option<String>>,
}

#[function_component(SpecializationSelect)]
pub fn specialization_select(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                let value = sel.value();
                cb.emit((!value.is_empty()).then_some(value));
            }
        })
    };
    let selected = p.selected.clone().unwrap_or_default();
    html! {
        <label class="specialization">
            { "Specialization" }
            <select id="specialization-select" onchange={on_change}>
                <option value="" selected={selected.is_empty()}>{ "None" }</option>
                { for p.names.iter().map(|name| html! {
                    <option value={name.clone()} selected={*name == selected}>{ name.clone() }</option>
                }) }
            </select>
        </label>
    }
}
