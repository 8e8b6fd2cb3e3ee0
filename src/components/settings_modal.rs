use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub on_hard_reset: Callback<()>,
}

const WIPE_PROMPT: &str =
    "Wipe ALL progress? Coins, XP, and every subject's completed levels are deleted.";

#[function_component(SettingsModal)]
pub fn settings_modal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let wipe = {
        let on_hard_reset = props.on_hard_reset.clone();
        Callback::from(move |_: MouseEvent| {
            // Destructive and irreversible: gate behind a browser confirm.
            let confirmed = web_sys::window()
                .map(|win| win.confirm_with_message(WIPE_PROMPT).unwrap_or(false))
                .unwrap_or(true);
            if confirmed {
                on_hard_reset.emit(());
            }
        })
    };

    html! {
        <div style="position:fixed; inset:0; background:rgba(1,4,9,0.6); display:flex; align-items:center; justify-content:center; z-index:40;">
            <div style="background:#161b22; border:1px solid #30363d; border-radius:14px; width:min(420px, 92vw); padding:20px;">
                <h3 style="margin:0 0 10px 0;">{"Settings"}</h3>
                <p style="margin:0 0 16px 0; font-size:13px; opacity:0.8; line-height:1.5;">
                    {"Progress saves on its own after every finished level. \
                      Cleared levels stay open for replay, but a replay never pays out twice."}
                </p>
                <div style="border-top:1px solid #30363d; padding-top:14px; display:flex; flex-direction:column; gap:10px;">
                    <div style="font-size:12px; color:#f85149; font-weight:600;">{"Danger zone"}</div>
                    <button onclick={wipe} style="background:#f85149; border:1px solid #b62324; color:#fff; padding:8px;">
                        {"Wipe all progress"}
                    </button>
                </div>
                <div style="margin-top:16px; text-align:right;">
                    <button onclick={close}>{"Close"}</button>
                </div>
            </div>
        </div>
    }
}
