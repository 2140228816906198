use std::sync::Arc;

use partyplanner_core::constants::{EMPTY_SLOT, SLOT_COUNT};
use partyplanner_core::{
    BuildParams, Party, PartyPlanner, PartySlot, Perk, ReferenceData, ReferenceIndex,
    SlotPosition, Specialization, Status, decode, decode_str, encode,
};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn index() -> ReferenceIndex {
    let data = ReferenceData::from_json_parts(
        include_str!("../../partyplanner-web/static/assets/data/monsters.json"),
        include_str!("../../partyplanner-web/static/assets/data/specializations.json"),
    )
    .expect("shipped dataset parses");
    ReferenceIndex::build(&data)
}

struct RandomBuild {
    party: Party,
    specialization: Option<Specialization>,
    anointments: Vec<Perk>,
}

fn random_build(rng: &mut ChaCha8Rng, index: &ReferenceIndex) -> RandomBuild {
    let monsters: Vec<_> = index.monsters().cloned().collect();
    let slots = (0..SLOT_COUNT).map(|_| {
        if rng.gen_bool(0.6) {
            PartySlot::filled(monsters.choose(rng).cloned().expect("monsters"))
        } else {
            PartySlot::empty()
        }
    });
    let party = Party::from_slots(slots.collect::<Vec<_>>());

    let specs: Vec<_> = index.specializations().cloned().collect();
    let specialization = if rng.gen_bool(0.8) {
        specs.choose(rng).cloned()
    } else {
        None
    };
    let limit = match specialization.as_ref() {
        Some(spec) if spec.name == "Royal" => 15,
        _ => 5,
    };
    let mut pool: Vec<_> = index.anointments().cloned().collect();
    pool.shuffle(rng);
    let count = rng.gen_range(0..=limit);
    pool.truncate(count);

    RandomBuild {
        party,
        specialization,
        anointments: pool,
    }
}

#[test]
fn random_valid_builds_round_trip() {
    let index = index();
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED_B01D);
    for _ in 0..250 {
        let build = random_build(&mut rng, &index);
        let code = encode(&build.party, build.specialization.as_ref(), &build.anointments);

        let report = decode_str(&code, &index);
        assert_eq!(report.status(), Status::Success, "{code}: {}", report.message());
        let decoded = report.into_value().expect("decoded build");
        assert_eq!(decoded.party, build.party, "{code}");
        assert_eq!(decoded.specialization, build.specialization, "{code}");
        assert_eq!(decoded.anointments.as_slice(), build.anointments.as_slice());
    }
}

#[test]
fn encode_always_emits_eighteen_slot_tokens() {
    let index = index();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..50 {
        let build = random_build(&mut rng, &index);
        let code = encode(&build.party, None, &[]);
        let placeholders = code.chars().filter(|&c| c == EMPTY_SLOT).count();
        let filled = build.party.filled_count();
        assert_eq!(placeholders + filled, SLOT_COUNT);
        assert_eq!(code.len(), placeholders + filled * 4);
    }
}

#[test]
fn royal_example_decodes_fifteen_anointments() {
    let index = index();
    let uids: Vec<String> = index.anointments().take(15).map(|p| p.uid.clone()).collect();
    let code = format!("{}&s=RY&a={}", "_".repeat(SLOT_COUNT), uids.concat());

    let report = decode(&BuildParams::parse(&code), &index, None);
    assert_eq!(report.status(), Status::Success);
    let build = report.into_value().expect("decoded build");
    assert_eq!(build.party, Party::new());
    assert_eq!(build.specialization.expect("royal").name, "Royal");
    let decoded: Vec<&str> = build.anointments.iter().map(|p| p.uid.as_str()).collect();
    assert_eq!(decoded, uids);
}

#[test]
fn planner_string_tracks_every_mutation() {
    let index = Arc::new(index());
    let mut planner = PartyPlanner::new(Arc::clone(&index));
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let monsters: Vec<_> = index.monsters().cloned().collect();

    for _ in 0..100 {
        let pos = SlotPosition::from_ordinal(rng.gen_range(0..SLOT_COUNT));
        if rng.gen_bool(0.7) {
            planner.place_monster_at(pos, monsters.choose(&mut rng).cloned().expect("monsters"));
        } else {
            planner.clear_slot(pos);
        }
        let expected = encode(planner.party(), planner.specialization(), planner.anointments());
        assert_eq!(planner.build_code(), expected);
        let derived = partyplanner_core::members_of(planner.party());
        assert_eq!(planner.members(), &derived);
    }

    let restored = PartyPlanner::from_query(index, &planner.share_url("https://example.test/"));
    assert_eq!(restored.party(), planner.party());
}
