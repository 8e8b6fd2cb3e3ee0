use yew::prelude::*;

use super::feedback_overlay::FeedbackOverlay;
use super::hooks::{use_advance_timer, use_second_ticker};
use crate::content;
use crate::model::{LevelDescriptor, Subject};
use crate::state::session::{SessionAction, SessionResult, TimedSession};
use crate::util::format_countdown;

/// Short window: the whole session runs against one countdown.
const FEEDBACK_DELAY_MS: u32 = 700;

#[derive(Properties, PartialEq, Clone)]
pub struct FlashViewProps {
    pub subject: Subject,
    pub level: &'static LevelDescriptor,
    pub on_finished: Callback<SessionResult>,
    pub on_leave: Callback<()>,
}

#[function_component(FlashView)]
pub fn flash_view(props: &FlashViewProps) -> Html {
    let session = use_reducer({
        let subject = props.subject;
        let level = props.level;
        move || {
            TimedSession::new(
                content::session_items(content::flash_bank(subject), level),
                content::check_quiz,
                Some(content::FLASH_SECONDS),
            )
        }
    });

    {
        let session_handle = session.clone();
        use_second_ticker(move || session_handle.dispatch(SessionAction::TickSecond));
    }
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

    let secs = session.seconds_left.unwrap_or(0);
    let timer_color = if secs <= 10 { "#f85149" } else { "#e6edf3" };
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
                    <div style="font-size:13px; opacity:0.7;">{ format!("Question {} of {}, beat the clock", item_index + 1, total) }</div>
                </div>
                <div style="display:flex; gap:12px; align-items:center;">
                    <span style={format!("font-size:24px; font-weight:600; font-variant-numeric:tabular-nums; color:{};", timer_color)}>
                        { format_countdown(secs) }
                    </span>
                    <button onclick={leave_cb}>{"Leave"}</button>
                </div>
            </div>
            <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:20px; font-size:20px; text-align:center;">
                { item.prompt }
            </div>
            <div style="display:flex; gap:10px; justify-content:center; flex-wrap:wrap;">
                { for item.options.iter().enumerate().map(|(i, opt)| {
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
                            disabled={verdict.is_some()}
                            style="background:#1c2128; border:1px solid #30363d; border-radius:10px; padding:14px 22px; color:inherit; font-size:16px; cursor:pointer;">
                            { *opt }
                        </button>
                    }
                }) }
            </div>
            <div style="font-size:13px; opacity:0.7; text-align:center;">
                { format!("{} answered, {} correct", session.runner.answered_count(), session.runner.correct_count()) }
            </div>
            <FeedbackOverlay
                verdict={verdict}
                correct_answer={item.options[item.correct]}
                explanation={item.explanation.map(AttrValue::from)} />
        </div>
    }
}
