use crate::app::state::PlannerStore;
use crate::data::create_web_engine;
use partyplanner_core::PartyPlanner;
use yew::prelude::*;

/// Query string the page was opened with.
#[must_use]
pub fn initial_query() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::location_search()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// Planner over the embedded data, decoded from `query`.
#[must_use]
pub fn planner_for_query(query: &str) -> PartyPlanner {
    let planner = create_web_engine().planner_from_query(query);
    let notice = planner.notice();
    log::info!("Loaded build ({:?}): {}", notice.status, notice.message);
    planner
}

/// Planner store seeded once from `query`.
#[hook]
pub fn use_planner_store(query: &str) -> UseReducerHandle<PlannerStore> {
    let query = query.to_string();
    use_reducer(move || PlannerStore::new(planner_for_query(&query)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use partyplanner_core::Status;

    #[test]
    fn native_builds_start_without_a_query() {
        assert_eq!(initial_query(), "");
        let planner = planner_for_query(&initial_query());
        assert_eq!(planner.filled_slot_count(), 0);
        assert_eq!(planner.notice().status, Status::None);
    }

    #[test]
    fn malformed_query_reports_error() {
        let planner = planner_for_query("?b=abc");
        assert_eq!(planner.notice().status, Status::Error);
    }
}
