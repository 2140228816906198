use std::collections::BTreeSet;
use std::rc::Rc;

use partyplanner_core::Monster;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub monsters: Rc<Vec<Monster>>,
    pub members: Rc<BTreeSet<String>>,
    /// Occupant of the targeted slot; stays pickable even though it is in the party.
    #[prop_or_default]
    pub current: Option<Monster>,
    #[prop_or_default]
    pub on_pick: Callback<String>,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

#[function_component(MonsterPicker)]
pub fn monster_picker(p: &Props) -> Html {
    let current_uid = p.current.as_ref().map(|m| m.uid.clone());
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="monster-picker" role="dialog" aria-label="Choose a trait">
            <button class="monster-picker__close" onclick={close}>{ "Close" }</button>
            <ul>
                { for p.monsters.iter().map(|monster| {
                    let is_current = current_uid.as_deref() == Some(monster.uid.as_str());
                    let taken = p.members.contains(&monster.uid) && !is_current;
                    let pick = {
                        let cb = p.on_pick.clone();
                        let uid = monster.uid.clone();
                        Callback::from(move |_| cb.emit(uid.clone()))
                    };
                    html! {
                        <li key={monster.uid.clone()} class={classes!("monster", is_current.then_some("monster--current"))}>
                            <button onclick={pick} disabled={taken} title={monster.trait_description.clone()}>
                                <strong>{ monster.trait_name.clone() }</strong>
                                { " " }
                                <span class="monster__creature">{ monster.creature.clone() }</span>
                            </button>
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn monster(uid: &str, trait_name: &str) -> Monster {
        Monster {
            uid: uid.to_string(),
            creature: "Wisp".to_string(),
            family: String::new(),
            trait_name: trait_name.to_string(),
            trait_description: String::new(),
        }
    }

    #[test]
    fn party_members_other_than_current_are_disabled() {
        let monsters = Rc::new(vec![monster("Aa01", "Glimmer"), monster("Bb02", "Foresight")]);
        let members = Rc::new(BTreeSet::from(["Aa01".to_string(), "Bb02".to_string()]));
        let props = Props {
            monsters,
            members,
            current: Some(monster("Aa01", "Glimmer")),
            on_pick: Callback::noop(),
            on_close: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<MonsterPicker>::with_props(props).render());
        assert!(html.contains("monster--current"));
        assert_eq!(html.matches("disabled").count(), 1);
        assert!(html.contains("Foresight"));
    }
}
