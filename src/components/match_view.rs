use yew::prelude::*;

use super::feedback_overlay::FeedbackOverlay;
use super::hooks::use_advance_timer;
use crate::content;
use crate::model::{LevelDescriptor, Subject};
use crate::state::session::{SessionAction, SessionResult, TimedSession};

const FEEDBACK_DELAY_MS: u32 = 1200;

#[derive(Properties, PartialEq, Clone)]
pub struct MatchViewProps {
    pub subject: Subject,
    pub level: &'static LevelDescriptor,
    pub on_finished: Callback<SessionResult>,
    pub on_leave: Callback<()>,
}

/// Pair-matching session: same runner as the quiz kinds, but the response is
/// the chosen right-hand string and correctness is structural equality.
#[function_component(MatchView)]
pub fn match_view(props: &MatchViewProps) -> Html {
    let session = use_reducer({
        let subject = props.subject;
        let level = props.level;
        move || {
            TimedSession::new(
                content::session_items(content::match_bank(subject), level),
                content::check_match,
                None,
            )
        }
    });

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

    html! {
        <div style="position:relative; max-width:640px; margin:0 auto; padding:24px; display:flex; flex-direction:column; gap:16px; min-height:100vh;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <div>
                    <h2 style="margin:0;">{ props.level.name }</h2>
                    <div style="font-size:13px; opacity:0.7;">{ format!("Pair {} of {}", item_index + 1, total) }</div>
                </div>
                <div style="display:flex; gap:8px; align-items:center;">
                    <span style="font-size:13px; opacity:0.7;">{ format!("{} matched", session.runner.correct_count()) }</span>
                    <button onclick={leave_cb}>{"Leave"}</button>
                </div>
            </div>
            <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:20px; font-size:18px; text-align:center;">
                { format!("What goes with \"{}\"?", item.left) }
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                { for item.choices().into_iter().map(|choice| {
                    let answer_cb = {
                        let session = session.clone();
                        Callback::from(move |_| session.dispatch(SessionAction::Submit {
                            item_index,
                            response: choice,
                        }))
                    };
                    html! {
                        <button
                            onclick={answer_cb}
                            disabled={verdict.is_some()}
                            style="background:#1c2128; border:1px solid #30363d; border-radius:10px; padding:12px 16px; color:inherit; text-align:left; cursor:pointer;">
                            { choice }
                        </button>
                    }
                }) }
            </div>
            <FeedbackOverlay
                verdict={verdict}
                correct_answer={item.right}
                explanation={None::<AttrValue>} />
        </div>
    }
}
