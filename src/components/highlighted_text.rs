use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HighlightedTextProps {
    pub text: String,
    pub segment_id: String,
    #[prop_or(false)]
    pub active: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_click: Option<Callback<()>>,
}

#[function_component]
pub fn HighlightedText(props: &HighlightedTextProps) -> Html {
    if props.text.is_empty() {
        return html! {};
    }

    let style = if props.active {
        "padding:6px 10px; border-radius:6px; background:rgba(88,166,255,0.18); border-left:3px solid #58a6ff; cursor:pointer;"
    } else {
        "padding:6px 10px; border-radius:6px; border-left:3px solid transparent; opacity:0.75; cursor:pointer;"
    };
    let onclick = props.on_click.clone().map(|cb| {
        Callback::from(move |_: MouseEvent| cb.emit(()))
    });

    html! {
        <div class={props.class.clone()} data-segment={props.segment_id.clone()} style={style} onclick={onclick}>
            <span>{ props.text.clone() }</span>
        </div>
    }
}
