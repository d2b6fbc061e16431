use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsHeaderProps {
    pub title: String,
    /// Back navigation is injected so the header works under any host.
    pub on_back: Callback<()>,
}

#[function_component]
pub fn SettingsHeader(props: &SettingsHeaderProps) -> Html {
    let back_cb = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="display:flex; justify-content:space-between; align-items:center; border-bottom:1px solid #30363d; padding-bottom:10px;">
        <h3 style="margin:0; font-size:18px;">{ props.title.clone() }</h3>
        <button onclick={back_cb} style="padding:4px 10px;">{"Back"}</button>
    </div>}
}
