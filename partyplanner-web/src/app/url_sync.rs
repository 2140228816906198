use crate::app::state::PlannerStore;
use yew::prelude::*;

/// Mirror the build code into the address bar whenever it changes, and load
/// the address bar's build when the user walks the session history.
///
/// The first write replaces the landing entry so Back leaves the page instead
/// of stepping to an unnormalised URL. Builds restored from history are also
/// written with replace so they never grow the stack.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_url_sync(store: &UseReducerHandle<PlannerStore>) {
    use crate::app::state::PlannerAction;
    use crate::dom::{self, HistoryMode};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let mode = use_mut_ref(|| HistoryMode::Replace);

    {
        let mode = mode.clone();
        let dispatcher = store.dispatcher();
        use_effect_with((), move |()| {
            let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                *mode.borrow_mut() = HistoryMode::Replace;
                dispatcher.dispatch(PlannerAction::LoadQuery(dom::location_search()));
            });
            let win = dom::window();
            if let Some(win) = &win {
                let added = win
                    .add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref());
                if let Err(err) = added {
                    dom::console_error(&format!(
                        "Failed to watch history: {}",
                        dom::js_error_message(&err)
                    ));
                }
            }
            move || {
                if let Some(win) = win {
                    let _ = win.remove_event_listener_with_callback(
                        "popstate",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let build = store.planner.build_code().to_string();
    use_effect_with(build, move |build| {
        let current = mode.replace(HistoryMode::Push);
        if let Err(err) = dom::sync_build(build, current) {
            dom::console_error(&format!(
                "Failed to update URL: {}",
                dom::js_error_message(&err)
            ));
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_url_sync(store: &UseReducerHandle<PlannerStore>) {
    let _ = store;
}
