use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::feedback_overlay::FeedbackOverlay;
use super::hooks::use_advance_timer;
use crate::content;
use crate::model::{LevelDescriptor, Subject};
use crate::state::session::{SessionAction, SessionResult, TimedSession};

/// Long enough to read the correction for a typed miss.
const FEEDBACK_DELAY_MS: u32 = 2000;

#[derive(Properties, PartialEq, Clone)]
pub struct FillViewProps {
    pub subject: Subject,
    pub level: &'static LevelDescriptor,
    pub on_finished: Callback<SessionResult>,
    pub on_leave: Callback<()>,
}

#[function_component(FillView)]
pub fn fill_view(props: &FillViewProps) -> Html {
    let session = use_reducer({
        let subject = props.subject;
        let level = props.level;
        move || {
            TimedSession::new(
                content::session_items(content::fill_bank(subject), level),
                content::check_fill,
                None,
            )
        }
    });
    let input = use_state(String::new);

    {
        let session_handle = session.clone();
        let pending = session.runner.pending_feedback().is_some();
        let generation = session.runner.generation();
        use_advance_timer(pending, generation, FEEDBACK_DELAY_MS, move || {
            session_handle.dispatch(SessionAction::Advance { generation })
        });
    }
    {
        let on_finished = props.on_finished.clone();
        use_effect_with(session.runner.finished(), move |finished| {
            if let Some(result) = finished {
                on_finished.emit(*result);
            }
            || ()
        });
    }
    // Fresh input box per item.
    {
        let input = input.clone();
        use_effect_with(session.runner.index(), move |_| {
            input.set(String::new());
            || ()
        });
    }

    let leave_cb = {
        let cb = props.on_leave.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let total = session.runner.len();
    let item_index = session.runner.index();
    let verdict = session.runner.pending_feedback();
    let Some(item) = session.runner.current().copied() else {
        return html! {};
    };

    let oninput = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let el: HtmlInputElement = e.target_unchecked_into();
            input.set(el.value());
        })
    };
    let submit = {
        let session = session.clone();
        let input = input.clone();
        Callback::from(move |_: ()| {
            let response = (*input).clone();
            if response.trim().is_empty() {
                return;
            }
            session.dispatch(SessionAction::Submit {
                item_index,
                response,
            });
        })
    };
    let submit_click = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };
    let onkeydown = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit.emit(());
            }
        })
    };

    html! {
        <div style="position:relative; max-width:640px; margin:0 auto; padding:24px; display:flex; flex-direction:column; gap:16px; min-height:100vh;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <div>
                    <h2 style="margin:0;">{ props.level.name }</h2>
                    <div style="font-size:13px; opacity:0.7;">{ format!("Blank {} of {}", item_index + 1, total) }</div>
                </div>
                <div style="display:flex; gap:8px; align-items:center;">
                    <span style="font-size:13px; opacity:0.7;">{ format!("{} correct", session.runner.correct_count()) }</span>
                    <button onclick={leave_cb}>{"Leave"}</button>
                </div>
            </div>
            <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:20px; font-size:18px;">
                { item.prompt }
            </div>
            <div style="display:flex; gap:8px;">
                <input
                    type="text"
                    value={(*input).clone()}
                    oninput={oninput}
                    onkeydown={onkeydown}
                    disabled={verdict.is_some()}
                    placeholder="Type your answer"
                    style="flex:1; background:#0d1117; border:1px solid #30363d; border-radius:8px; padding:10px 12px; color:inherit; font-size:16px;" />
                <button onclick={submit_click} disabled={verdict.is_some()}>{"Submit"}</button>
            </div>
            <FeedbackOverlay
                verdict={verdict}
                correct_answer={item.accepted[0]}
                explanation={item.explanation.map(AttrValue::from)} />
        </div>
    }
}
