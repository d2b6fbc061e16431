use crate::util::format_time;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TimeDisplayProps {
    pub position_secs: f64,
    pub duration_secs: f64,
    pub play_label: String,
    pub on_toggle_play: Callback<()>,
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    let play_cb = {
        let cb = props.on_toggle_play.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="display:flex; flex-direction:column; align-items:center; gap:6px;">
        <div style="font-size:20px; font-weight:600;">
            { format!("{} / {}", format_time(props.position_secs), format_time(props.duration_secs)) }
        </div>
        <button onclick={play_cb} style="padding:4px 10px; font-size:12px;">{ props.play_label.clone() }</button>
    </div>}
}
