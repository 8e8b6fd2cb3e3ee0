use yew::prelude::*;

use super::feedback_overlay::FeedbackOverlay;
use super::hooks::use_advance_timer;
use crate::content;
use crate::model::{BossStats, LevelDescriptor, Subject};
use crate::state::battle::{BattleAction, BossBattle, MAX_COMBO, PLAYER_MAX_HP};
use crate::state::session::SessionResult;

const FEEDBACK_DELAY_MS: u32 = 1200;

#[derive(Properties, PartialEq, Clone)]
pub struct BossViewProps {
    pub subject: Subject,
    pub level: &'static LevelDescriptor,
    pub on_finished: Callback<SessionResult>,
    pub on_leave: Callback<()>,
}

fn hp_bar(label: &str, current: u32, max: u32, color: &str) -> Html {
    let percent = if max == 0 { 0 } else { current * 100 / max };
    html! {
        <div style="flex:1; min-width:200px;">
            <div style="display:flex; justify-content:space-between; font-size:13px; margin-bottom:4px;">
                <span>{ label.to_string() }</span>
                <span style="font-variant-numeric:tabular-nums;">{ format!("{} / {}", current, max) }</span>
            </div>
            <div style="background:#21262d; border:1px solid #30363d; border-radius:6px; height:14px; overflow:hidden;">
                <div style={format!("background:{}; width:{}%; height:100%;", color, percent)}></div>
            </div>
        </div>
    }
}

#[function_component(BossView)]
pub fn boss_view(props: &BossViewProps) -> Html {
    let battle = use_reducer({
        let subject = props.subject;
        let level = props.level;
        move || {
            BossBattle::new(
                content::session_items(content::boss_bank(subject), level),
                level.boss.unwrap_or(BossStats {
                    health: 60,
                    damage: 10,
                }),
            )
        }
    });

    {
        let battle_handle = battle.clone();
        let pending = battle.runner.pending_feedback().is_some();
        let generation = battle.runner.generation();
        use_advance_timer(pending, generation, FEEDBACK_DELAY_MS, move || {
            battle_handle.dispatch(BattleAction::Advance { generation })
        });
    }
    {
        let on_finished = props.on_finished.clone();
        use_effect_with(battle.runner.finished(), move |finished| {
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

    let item_index = battle.runner.index();
    let verdict = battle.runner.pending_feedback();
    let combo = battle.combo.min(MAX_COMBO);

    let prompt = match battle.runner.current().copied() {
        Some(item) => item,
        // Knockout feedback still showing, or routed away next tick.
        None => return html! {},
    };

    html! {
        <div style="position:relative; max-width:680px; margin:0 auto; padding:24px; display:flex; flex-direction:column; gap:16px; min-height:100vh;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h2 style="margin:0; color:#8957e5;">{ props.level.name }</h2>
                <button onclick={leave_cb}>{"Flee"}</button>
            </div>
            <div style="display:flex; gap:24px; flex-wrap:wrap;">
                { hp_bar("You", battle.player_hp, PLAYER_MAX_HP, "#2ea043") }
                { hp_bar(props.level.name, battle.boss_hp, battle.boss_max_hp, "#f85149") }
            </div>
            { if combo >= 2 {
                html! { <div style="text-align:center; color:#d4af37; font-weight:600;">{ format!("Combo x{}! Answers hit harder.", combo) }</div> }
            } else { html! {} } }
            <div style="background:#161b22; border:1px solid #8957e5; border-radius:12px; padding:20px; font-size:18px;">
                { prompt.prompt }
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                { for prompt.options.iter().enumerate().map(|(i, opt)| {
                    let answer_cb = {
                        let battle = battle.clone();
                        Callback::from(move |_| battle.dispatch(BattleAction::Answer {
                            item_index,
                            option: i,
                        }))
                    };
                    html! {
                        <button
                            onclick={answer_cb}
                            disabled={verdict.is_some()}
                            style="background:#1c2128; border:1px solid #30363d; border-radius:10px; padding:12px 16px; color:inherit; text-align:left; cursor:pointer;">
                            { *opt }
                        </button>
                    }
                }) }
            </div>
            <div style="font-size:13px; opacity:0.7;">
                {"Correct answers strike the boss; misses cost you health and break the combo."}
            </div>
            <FeedbackOverlay
                verdict={verdict}
                correct_answer={prompt.options[prompt.correct]}
                explanation={prompt.explanation.map(AttrValue::from)} />
        </div>
    }
}
