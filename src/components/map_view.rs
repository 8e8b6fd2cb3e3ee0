use yew::prelude::*;

use super::{settings_modal::SettingsModal, wallet_panel::WalletPanel};
use crate::content;
use crate::model::{GameAction, GameState, LevelKind};
use crate::state::storage;

#[derive(Properties, PartialEq, Clone)]
pub struct MapViewProps {
    pub game: UseReducerHandle<GameState>,
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let show_settings = use_state(|| false);
    let game = props.game.clone();
    let Some(subject) = game.subject else {
        // The reducer only enters Map with a subject; render nothing if not.
        return html! {};
    };
    let progress = game.track_progress(subject);
    let track = content::track(subject);

    let home_cb = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::GoHome))
    };
    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(true))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(false))
    };
    let hard_reset = {
        let game = game.clone();
        let show_settings = show_settings.clone();
        Callback::from(move |_| {
            storage::clear();
            game.dispatch(GameAction::ResetAll);
            show_settings.set(false);
        })
    };

    // Banner for the most recent non-boss session.
    let banner = game.last_outcome.as_ref().map(|outcome| {
        if outcome.passed {
            let text = match outcome.reward {
                Some(reward) => format!(
                    "Level {} cleared at {}%: +{} coins, +{} XP",
                    outcome.level_id,
                    outcome.result.success_rate_percent,
                    reward.coins,
                    reward.xp
                ),
                None => format!(
                    "Level {} cleared again at {}% (already complete)",
                    outcome.level_id, outcome.result.success_rate_percent
                ),
            };
            html! { <div style="background:#12261e; border:1px solid #2ea043; border-radius:8px; padding:10px 14px;">{ text }</div> }
        } else if outcome.track_reset {
            html! { <div style="background:#2d1517; border:1px solid #f85149; border-radius:8px; padding:10px 14px;">
                { format!("The boss won at {}%. The track starts over at level 1.", outcome.result.success_rate_percent) }
            </div> }
        } else {
            html! { <div style="background:#2d1f12; border:1px solid #f0883e; border-radius:8px; padding:10px 14px;">
                { format!("{}%. You need 80% to pass. Nothing lost, try again.", outcome.result.success_rate_percent) }
            </div> }
        }
    });

    html! {
        <div style="position:relative; max-width:720px; margin:0 auto; padding:24px; display:flex; flex-direction:column; gap:16px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h2 style="margin:0;">{ format!("{} Track", subject.title()) }</h2>
                <div style="display:flex; gap:8px;">
                    <button onclick={open_settings}>{"Settings"}</button>
                    <button onclick={home_cb}>{"Subjects"}</button>
                </div>
            </div>
            <WalletPanel coins={game.wallet.coins} xp={game.wallet.xp} />
            { if let Some(banner) = banner { banner } else { html! {} } }
            <div style="display:flex; flex-direction:column; gap:10px;">
                { for track.iter().map(|level| {
                    let unlocked = progress.is_unlocked(level.id);
                    let completed = progress.completed.contains(&level.id);
                    let status = if completed {
                        ("✓", "#2ea043")
                    } else if unlocked {
                        ("▶", "#58a6ff")
                    } else {
                        ("🔒", "#6e7681")
                    };
                    let select_cb = {
                        let game = game.clone();
                        let id = level.id;
                        Callback::from(move |_| game.dispatch(GameAction::SelectLevel(id)))
                    };
                    let row_border = if level.kind == LevelKind::Boss { "#8957e5" } else { "#30363d" };
                    html! {
                        <button
                            onclick={select_cb}
                            disabled={!unlocked}
                            style={format!(
                                "display:flex; align-items:center; gap:12px; background:#161b22; border:1px solid {}; border-radius:10px; padding:12px 16px; color:inherit; text-align:left; cursor:{}; opacity:{};",
                                row_border,
                                if unlocked { "pointer" } else { "default" },
                                if unlocked { "1" } else { "0.5" },
                            )}>
                            <span style={format!("width:24px; text-align:center; color:{};", status.1)}>{ status.0 }</span>
                            <span style="flex:1;">
                                <span style="font-weight:600;">{ format!("{}. {}", level.id, level.name) }</span>
                                <span style="margin-left:10px; font-size:12px; opacity:0.7;">{ level.kind.label() }</span>
                            </span>
                            { if completed { html!{ <span style="font-size:12px; opacity:0.7;">{"replayable"}</span> } } else { html!{} } }
                        </button>
                    }
                }) }
            </div>
            <SettingsModal show={*show_settings} on_close={close_settings} on_hard_reset={hard_reset} />
        </div>
    }
}
