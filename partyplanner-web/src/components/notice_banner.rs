use partyplanner_core::{Notice, Status};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub notice: Notice,
}

const fn status_class(status: Status) -> &'static str {
    match status {
        Status::None => "",
        Status::Success => "notice notice--success",
        Status::Warning => "notice notice--warning",
        Status::Error => "notice notice--error",
    }
}

#[function_component(NoticeBanner)]
pub fn notice_banner(p: &Props) -> Html {
    if p.notice.status == Status::None || p.notice.message.is_empty() {
        return Html::default();
    }
    let role = if p.notice.status == Status::Error {
        "alert"
    } else {
        "status"
    };
    html! {
        <div class={status_class(p.notice.status)} role={role} aria-live="polite">
            { p.notice.message.clone() }
        </div>
    }
}
