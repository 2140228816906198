use partyplanner_core::Perk;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub available: Vec<Perk>,
    pub selected: Vec<Perk>,
    pub limit: usize,
    #[prop_or_default]
    pub on_toggle: Callback<String>,
}

#[function_component(AnointmentList)]
pub fn anointment_list(p: &Props) -> Html {
    let full = p.selected.len() >= p.limit;
    html! {
        <fieldset class="anointments">
            <legend>{ format!("Anointments ({}/{})", p.selected.len(), p.limit) }</legend>
            { for p.available.iter().map(|perk| {
                let checked = p.selected.iter().any(|s| s.name == perk.name);
                let toggle = {
                    let cb = p.on_toggle.clone();
                    let uid = perk.uid.clone();
                    Callback::from(move |_: Event| cb.emit(uid.clone()))
                };
                html! {
                    <label key={perk.uid.clone()} class="anointment" title={perk.description.clone()}>
                        <input type="checkbox" {checked} disabled={full && !checked} onchange={toggle} />
                        { perk.name.clone() }
                    </label>
                }
            }) }
        </fieldset>
    }
}
