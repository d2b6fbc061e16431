use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoadingOverlayProps {
    pub show: bool,
}

#[function_component]
pub fn LoadingOverlay(props: &LoadingOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    html! {
        <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
            <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 24px; font-size:14px;">
                {"Loading transcript…"}
            </div>
        </div>
    }
}
