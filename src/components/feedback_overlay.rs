use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FeedbackOverlayProps {
    /// `None` hides the overlay; `Some(correct)` shows the verdict.
    pub verdict: Option<bool>,
    pub correct_answer: AttrValue,
    pub explanation: Option<AttrValue>,
}

/// Per-item verdict card shown during the feedback window between items.
/// The explanation only appears on a miss.
#[function_component(FeedbackOverlay)]
pub fn feedback_overlay(props: &FeedbackOverlayProps) -> Html {
    let Some(correct) = props.verdict else {
        return html! {};
    };
    let (border, title_color, title) = if correct {
        ("#2ea043", "#2ea043", "Correct!")
    } else {
        ("#f85149", "#f85149", "Not quite")
    };
    html! {
        <div style={format!("position:absolute; left:50%; bottom:32px; transform:translateX(-50%); background:rgba(0,0,0,0.88); border:2px solid {}; padding:14px 22px; border-radius:12px; text-align:center; min-width:280px; max-width:440px;", border)}>
            <div style={format!("font-size:18px; font-weight:600; color:{};", title_color)}>{ title }</div>
            { if !correct {
                html! {
                    <>
                        <div style="margin-top:6px; font-size:14px;">{ format!("Answer: {}", props.correct_answer) }</div>
                        { if let Some(expl) = &props.explanation {
                            html! { <div style="margin-top:6px; font-size:13px; opacity:0.8;">{ expl.clone() }</div> }
                        } else { html! {} } }
                    </>
                }
            } else { html! {} } }
        </div>
    }
}
