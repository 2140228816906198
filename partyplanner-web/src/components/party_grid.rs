use partyplanner_core::constants::{PARTY_SIZE, TRAITS_PER_MEMBER};
use partyplanner_core::{Party, SlotPosition};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub party: Party,
    #[prop_or_default]
    pub selected: Option<SlotPosition>,
    #[prop_or_default]
    pub on_select: Callback<SlotPosition>,
    #[prop_or_default]
    pub on_clear: Callback<SlotPosition>,
}

fn slot_id(pos: SlotPosition) -> String {
    format!("slot-{}-{}", pos.member, pos.trait_slot)
}

#[function_component(PartyGrid)]
pub fn party_grid(p: &Props) -> Html {
    let render_slot = |pos: SlotPosition| {
        let slot = p.party.slot(pos);
        let open = {
            let cb = p.on_select.clone();
            Callback::from(move |_| cb.emit(pos))
        };
        let clear = {
            let cb = p.on_clear.clone();
            Callback::from(move |_| cb.emit(pos))
        };
        let mut class = classes!("party-slot");
        if p.selected == Some(pos) {
            class.push("party-slot--selected");
        }
        if slot.error.is_some() {
            class.push("party-slot--missing");
        }
        let label = slot.monster.as_ref().map_or_else(
            || AttrValue::from("Empty"),
            |m| AttrValue::from(format!("{} ({})", m.trait_name, m.creature)),
        );
        html! {
            <li class={class} id={slot_id(pos)}>
                <button class="party-slot__pick" onclick={open}>{ label }</button>
                if let Some(err) = slot.error.clone() {
                    <span class="party-slot__error">{ err }</span>
                }
                if slot.monster.is_some() {
                    <button class="party-slot__clear" aria-label="Clear slot" onclick={clear}>{ "×" }</button>
                }
            </li>
        }
    };

    html! {
        <section class="party-grid" aria-label="Party">
            { for (0..PARTY_SIZE).map(|member| html! {
                <div class="party-member" key={member.to_string()}>
                    <h3>{ format!("Creature {}", member + 1) }</h3>
                    <ol>
                        { for (0..TRAITS_PER_MEMBER).map(|t| render_slot(SlotPosition::new(member, t))) }
                    </ol>
                </div>
            }) }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use partyplanner_core::{Monster, PartySlot};
    use yew::LocalServerRenderer;

    #[test]
    fn renders_filled_missing_and_empty_slots() {
        let mut party = Party::new();
        *party.slot_mut(SlotPosition::new(0, 0)) = PartySlot::filled(Monster {
            uid: "Ab01".to_string(),
            creature: "Abyssal".to_string(),
            family: String::new(),
            trait_name: "Blood Frenzy".to_string(),
            trait_description: String::new(),
        });
        *party.slot_mut(SlotPosition::new(5, 2)) =
            PartySlot::missing("This trait does not exist or has changed.");
        let props = Props {
            party,
            selected: Some(SlotPosition::new(3, 1)),
            on_select: Callback::noop(),
            on_clear: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<PartyGrid>::with_props(props).render());
        assert!(html.contains("Blood Frenzy (Abyssal)"));
        assert!(html.contains("party-slot--missing"));
        assert!(html.contains("does not exist or has changed"));
        assert!(html.contains("Creature 6"));
        assert_eq!(html.matches("party-slot--selected").count(), 1);
    }
}
