use partyplanner_core::constants::SLOT_COUNT;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub url: AttrValue,
    pub filled: usize,
}

#[function_component(ShareLink)]
pub fn share_link(p: &Props) -> Html {
    html! {
        <div class="share-link">
            <label for="share-url">{ format!("Share ({}/{SLOT_COUNT} traits)", p.filled) }</label>
            <input id="share-url" type="text" readonly=true value={p.url.clone()} />
        </div>
    }
}
