use yew::prelude::*;

use super::{
    boss_view::BossView, fill_view::FillView, flash_view::FlashView, home_view::HomeView,
    map_view::MapView, match_view::MatchView, quiz_view::QuizView, result_overlay::ResultOverlay,
};
use crate::model::{GameAction, GamePhase, GameState, LevelKind, Subject};
use crate::state::session::SessionResult;
use crate::state::storage;

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer(GameState::default);

    // Load persisted wallet & progress once. Phase always boots to Home, so
    // a reload can never resume mid-session.
    {
        let game = game.clone();
        use_effect_with((), move |_| {
            game.dispatch(GameAction::HydrateSaved {
                wallet: storage::load_wallet(),
                progress: storage::load_progress(),
            });
            || ()
        });
    }
    // Mirror wallet changes to storage.
    {
        let wallet = game.wallet;
        use_effect_with(wallet, move |w| {
            storage::save_wallet(w);
            || ()
        });
    }
    // Mirror progress changes to storage.
    {
        let progress = game.progress.clone();
        use_effect_with(progress, move |p| {
            storage::save_progress(p);
            || ()
        });
    }

    let select_subject = {
        let game = game.clone();
        Callback::from(move |s: Subject| game.dispatch(GameAction::SelectSubject(s)))
    };

    let content = match game.phase {
        GamePhase::Home => html! { <HomeView on_select_subject={select_subject} /> },
        GamePhase::Map => html! { <MapView game={game.clone()} /> },
        GamePhase::Playing(level) => {
            match game.subject {
                None => html! { <HomeView on_select_subject={select_subject} /> },
                Some(subject) => {
                    let on_finished = {
                        let game = game.clone();
                        let level_id = level.id;
                        Callback::from(move |result: SessionResult| {
                            game.dispatch(GameAction::SessionFinished { level_id, result })
                        })
                    };
                    let on_leave = {
                        let game = game.clone();
                        Callback::from(move |_| game.dispatch(GameAction::GoHome))
                    };
                    // Key on subject+level so replays mount a fresh session.
                    let key = format!("{:?}-{}", subject, level.id);
                    match level.kind {
                        LevelKind::Quiz => html! {
                            <QuizView key={key} subject={subject} level={level}
                                on_finished={on_finished} on_leave={on_leave} />
                        },
                        LevelKind::FlashQuiz => html! {
                            <FlashView key={key} subject={subject} level={level}
                                on_finished={on_finished} on_leave={on_leave} />
                        },
                        LevelKind::Matching => html! {
                            <MatchView key={key} subject={subject} level={level}
                                on_finished={on_finished} on_leave={on_leave} />
                        },
                        LevelKind::FillBlank => html! {
                            <FillView key={key} subject={subject} level={level}
                                on_finished={on_finished} on_leave={on_leave} />
                        },
                        LevelKind::Boss => html! {
                            <BossView key={key} subject={subject} level={level}
                                on_finished={on_finished} on_leave={on_leave} />
                        },
                    }
                }
            }
        }
        GamePhase::Victory | GamePhase::Defeat => {
            let on_continue = {
                let game = game.clone();
                Callback::from(move |_| game.dispatch(GameAction::ContinueFromOutcome))
            };
            html! {
                <ResultOverlay
                    victory={game.phase == GamePhase::Victory}
                    outcome={game.last_outcome}
                    on_continue={on_continue} />
            }
        }
    };

    html! {
        <div id="root" style="min-height:100vh; background:#0e1116; color:#e6edf3; font-family:system-ui, sans-serif;">
            { content }
        </div>
    }
}
