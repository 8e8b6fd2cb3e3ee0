use crate::model::Subject;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HomeViewProps {
    pub on_select_subject: Callback<Subject>,
}

#[function_component(HomeView)]
pub fn home_view(props: &HomeViewProps) -> Html {
    html! {
        <div style="display:flex; flex-direction:column; align-items:center; justify-content:center; min-height:100vh; gap:24px; padding:24px;">
            <h1 style="margin:0; font-size:40px; color:#58a6ff;">{"Quiz Quest"}</h1>
            <p style="margin:0; opacity:0.8; text-align:center; max-width:480px;">
                {"Pick a subject, clear its levels, and take down the boss. Score 80% or better to move forward."}
            </p>
            <div style="display:flex; gap:16px; flex-wrap:wrap; justify-content:center;">
                { for Subject::ALL.iter().map(|subject| {
                    let subject = *subject;
                    let cb = {
                        let on = props.on_select_subject.clone();
                        Callback::from(move |_| on.emit(subject))
                    };
                    html! {
                        <button onclick={cb} style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:20px 24px; min-width:220px; color:inherit; text-align:left; cursor:pointer;">
                            <div style="font-size:20px; font-weight:600; margin-bottom:6px;">{ subject.title() }</div>
                            <div style="font-size:13px; opacity:0.75;">{ subject.tagline() }</div>
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}
