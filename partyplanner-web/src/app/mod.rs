use std::rc::Rc;

use crate::app::state::{PlannerAction, PlannerStore};
use crate::components::anointment_list::AnointmentList;
use crate::components::import_panel::ImportPanel;
use crate::components::monster_picker::MonsterPicker;
use crate::components::notice_banner::NoticeBanner;
use crate::components::party_grid::PartyGrid;
use crate::components::share_link::ShareLink;
use crate::components::specialization_select::SpecializationSelect;
use partyplanner_core::SlotPosition;
use yew::prelude::*;

pub mod bootstrap;
pub mod state;
pub mod url_sync;

#[function_component(App)]
pub fn app() -> Html {
    let query = bootstrap::initial_query();
    html! { <Planner query={query} /> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PlannerProps {
    /// Query string decoded into the initial build.
    #[prop_or_default]
    pub query: AttrValue,
    #[prop_or_default]
    pub share_base: Option<AttrValue>,
}

#[function_component(Planner)]
pub fn planner(p: &PlannerProps) -> Html {
    let store = bootstrap::use_planner_store(&p.query);
    url_sync::use_url_sync(&store);

    let dispatch = |action: fn(SlotPosition) -> PlannerAction| {
        let store = store.clone();
        Callback::from(move |pos: SlotPosition| store.dispatch(action(pos)))
    };
    let on_select = dispatch(PlannerAction::OpenSelection);
    let on_clear = dispatch(PlannerAction::ClearSlot);
    let on_pick = {
        let store = store.clone();
        Callback::from(move |uid: String| store.dispatch(PlannerAction::PlaceMonster(uid)))
    };
    let on_close = {
        let store = store.clone();
        Callback::from(move |()| store.dispatch(PlannerAction::CloseSelection))
    };
    let on_toggle = {
        let store = store.clone();
        Callback::from(move |uid: String| store.dispatch(PlannerAction::ToggleAnointment(uid)))
    };
    let on_spec = {
        let store = store.clone();
        Callback::from(move |name: Option<String>| {
            store.dispatch(PlannerAction::SetSpecialization(name));
        })
    };
    let on_import = {
        let store = store.clone();
        Callback::from(move |text: String| store.dispatch(PlannerAction::Import(text)))
    };

    let planner = &store.planner;
    let index = planner.index();
    let share_base = p.share_base.as_ref().map_or_else(default_share_base, ToString::to_string);
    let spec_names: Vec<AttrValue> = index
        .specializations()
        .map(|s| AttrValue::from(s.name.clone()))
        .collect();
    let selected_spec = planner.specialization().map(|s| AttrValue::from(s.name.clone()));
    let available: Vec<_> = index.anointments().cloned().collect();

    html! {
        <main id="main" class="planner">
            <NoticeBanner notice={planner.notice().clone()} />
            <SpecializationSelect names={spec_names} selected={selected_spec} on_change={on_spec} />
            <PartyGrid
                party={planner.party().clone()}
                selected={planner.selection().map(|s| s.position)}
                {on_select}
                {on_clear}
            />
            if let Some(selection) = planner.selection() {
                <MonsterPicker
                    monsters={Rc::new(index.monsters().cloned().collect::<Vec<_>>())}
                    members={Rc::new(planner.members().clone())}
                    current={selection.current.clone()}
                    {on_pick}
                    {on_close}
                />
            }
            <AnointmentList
                {available}
                selected={planner.anointments().to_vec()}
                limit={planner.anointment_limit()}
                {on_toggle}
            />
            <ShareLink url={planner.share_url(&share_base)} filled={planner.filled_slot_count()} />
            <ImportPanel export_text={planner.export_party_string()} {on_import} />
        </main>
    }
}

fn default_share_base() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        crate::paths::current_share_base()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        crate::paths::share_base("")
    }
}
