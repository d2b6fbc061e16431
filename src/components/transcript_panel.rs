use super::highlighted_text::HighlightedText;
use crate::model::Segment;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TranscriptPanelProps {
    pub segments: Vec<Segment>,
    pub active_index: Option<usize>,
    pub on_select: Callback<usize>,
}

#[function_component]
pub fn TranscriptPanel(props: &TranscriptPanelProps) -> Html {
    if props.segments.is_empty() {
        return html! {
            <div style="font-size:12px; opacity:0.6; padding:12px;">{"No transcript loaded."}</div>
        };
    }

    html! {<div style="display:flex; flex-direction:column; gap:4px; overflow-y:auto; max-height:60vh; padding:4px;">
        { for props.segments.iter().enumerate().map(|(i, seg)| {
            let on_click = {
                let cb = props.on_select.clone();
                Callback::from(move |_| cb.emit(i))
            };
            html! {
                <HighlightedText
                    key={seg.id.clone()}
                    text={seg.text.clone()}
                    segment_id={seg.id.clone()}
                    active={props.active_index == Some(i)}
                    on_click={on_click}
                />
            }
        }) }
    </div>}
}
