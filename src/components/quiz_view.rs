use yew::prelude::*;

use super::feedback_overlay::FeedbackOverlay;
use super::hooks::use_advance_timer;
use crate::content;
use crate::model::{LevelDescriptor, Subject};
use crate::state::session::{SessionAction, SessionResult, TimedSession};

/// Feedback window between items.
const FEEDBACK_DELAY_MS: u32 = 1500;

#[derive(Properties, PartialEq, Clone)]
pub struct QuizViewProps {
    pub subject: Subject,
    pub level: &'static LevelDescriptor,
    pub on_finished: Callback<SessionResult>,
    pub on_leave: Callback<()>,
}

#[function_component(QuizView)]
pub fn quiz_view(props: &QuizViewProps) -> Html {
    let session = use_reducer({
        let subject = props.subject;
        let level = props.level;
        move || {
            TimedSession::new(
                content::session_items(content::quiz_bank(subject), level),
                content::check_quiz,
                None,
            )
        }
    });
    // 50/50 hint: hides two wrong options. Once per session, free.
    let hint_used = use_state(|| false);
    let hidden_options = use_state(Vec::<usize>::new);

    {
        let session_handle = session.clone();
        let pending = session.runner.pending_feedback().is_some();
        let generation = session.runner.generation();
        use_advance_timer(pending, generation, FEEDBACK_DELAY_MS, move || {
            session_handle.dispatch(SessionAction::Advance { generation })
        });
    }
    // Hand the result off exactly once.
    {
        let on_finished = props.on_finished.clone();
        use_effect_with(session.runner.finished(), move |finished| {
            if let Some(result) = finished {
                on_finished.emit(*result);
            }
            || ()
        });
    }
    // Hint hiding is per item.
    {
        let hidden_options = hidden_options.clone();
        use_effect_with(session.runner.index(), move |_| {
            hidden_options.set(Vec::new());
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
        // Terminated; the completion effect routes away next tick.
        return html! {};
    };

    let use_hint = {
        let hint_used = hint_used.clone();
        let hidden_options = hidden_options.clone();
        Callback::from(move |_| {
            if *hint_used {
                return;
            }
            let wrong: Vec<usize> = (0..item.options.len())
                .filter(|i| *i != item.correct)
                .take(2)
                .collect();
            hidden_options.set(wrong);
            hint_used.set(true);
        })
    };

    html! {
        <div style="position:relative; max-width:640px; margin:0 auto; padding:24px; display:flex; flex-direction:column; gap:16px; min-height:100vh;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <div>
                    <h2 style="margin:0;">{ props.level.name }</h2>
                    <div style="font-size:13px; opacity:0.7;">{ format!("Question {} of {}", item_index + 1, total) }</div>
                </div>
                <div style="display:flex; gap:8px; align-items:center;">
                    <span style="font-size:13px; opacity:0.7;">{ format!("{} correct", session.runner.correct_count()) }</span>
                    <button onclick={leave_cb}>{"Leave"}</button>
                </div>
            </div>
            <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:20px; font-size:18px;">
                { item.prompt }
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                { for item.options.iter().enumerate().map(|(i, opt)| {
                    let hidden = hidden_options.contains(&i);
                    let answer_cb = {
                        let session = session.clone();
                        Callback::from(move |_| session.dispatch(SessionAction::Submit {
                            item_index,
                            response: i,
                        }))
                    };
                    html! {
                        <button
                            onclick={answer_cb}
                            disabled={verdict.is_some() || hidden}
                            style={format!(
                                "background:#1c2128; border:1px solid #30363d; border-radius:10px; padding:12px 16px; color:inherit; text-align:left; cursor:pointer; opacity:{};",
                                if hidden { "0.25" } else { "1" }
                            )}>
                            { *opt }
                        </button>
                    }
                }) }
            </div>
            <div>
                <button onclick={use_hint} disabled={*hint_used || verdict.is_some()}>
                    { if *hint_used { "Hint used" } else { "50/50 Hint" } }
                </button>
            </div>
            <FeedbackOverlay
                verdict={verdict}
                correct_answer={item.options[item.correct]}
                explanation={item.explanation.map(AttrValue::from)} />
        </div>
    }
}
