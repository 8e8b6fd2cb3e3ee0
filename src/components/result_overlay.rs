use crate::state::gate::GateOutcome;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ResultOverlayProps {
    pub victory: bool,
    pub outcome: Option<GateOutcome>,
    pub on_continue: Callback<()>,
}

/// Full-screen interstitial for the boss kind only; ordinary levels go
/// straight back to the map.
#[function_component(ResultOverlay)]
pub fn result_overlay(props: &ResultOverlayProps) -> Html {
    let continue_cb = {
        let cb = props.on_continue.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let (title, color) = if props.victory {
        ("Victory!", "#2ea043")
    } else {
        ("Defeat", "#f85149")
    };
    html! {
        <div style="display:flex; align-items:center; justify-content:center; min-height:100vh;">
            <div style={format!("background:rgba(0,0,0,0.85); border:2px solid {}; padding:24px 32px; border-radius:12px; text-align:center; min-width:320px;", color)}>
                <h2 style={format!("margin:0 0 12px 0; color:{};", color)}>{ title }</h2>
                { if let Some(outcome) = &props.outcome {
                    html! {
                        <>
                            <p style="margin:4px 0;">{ format!(
                                "Accuracy: {}% ({} of {})",
                                outcome.result.success_rate_percent,
                                outcome.result.items_correct,
                                outcome.result.items_total
                            ) }</p>
                            { if let Some(reward) = outcome.reward {
                                html! { <p style="margin:4px 0; color:#d4af37;">{ format!("+{} coins, +{} XP", reward.coins, reward.xp) }</p> }
                            } else if outcome.passed {
                                html! { <p style="margin:4px 0; opacity:0.8;">{"Already cleared, no extra reward."}</p> }
                            } else { html! {} } }
                            { if outcome.track_reset {
                                html! { <p style="margin:4px 0; color:#f0883e;">{"The boss shattered your path. The track starts over at level 1."}</p> }
                            } else { html! {} } }
                        </>
                    }
                } else { html! {} } }
                <div style="margin-top:16px;">
                    <button onclick={continue_cb}>{"Back to Map"}</button>
                </div>
            </div>
        </div>
    }
}
