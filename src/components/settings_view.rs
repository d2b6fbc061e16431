use super::app::UiContext;
use super::settings_header::SettingsHeader;
use crate::model::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsViewProps {
    pub to_player: Callback<()>,
}

#[function_component]
pub fn SettingsView(props: &SettingsViewProps) -> Html {
    let ctx = use_context::<UiContext>().expect("UiContext not provided");

    html! {<div style="position:relative; width:100vw; height:100vh; display:flex; justify-content:center;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; height:fit-content; margin-top:48px; display:flex; flex-direction:column; gap:14px;">
            <SettingsHeader title="Settings" on_back={props.to_player.clone()} />
            <div style="display:flex; flex-direction:column; gap:10px;">
                <div style="font-weight:600;">{"Theme"}</div>
                { for Theme::ALL.iter().map(|theme| {
                    let theme = *theme;
                    let select_cb = {
                        let set_theme = ctx.set_theme.clone();
                        Callback::from(move |_| set_theme.emit(theme))
                    };
                    html! {
                        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                            <input
                                type="radio"
                                name="theme"
                                checked={ctx.state.theme == theme}
                                onclick={select_cb}
                            />
                            <span>{ theme.label() }</span>
                        </label>
                    }
                }) }
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">
                {"System follows the browser's color-scheme preference. Choices apply immediately and last for this session."}
            </div>
        </div>
    </div>}
}
