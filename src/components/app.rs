use super::{player_view::PlayerView, settings_view::SettingsView};
use crate::model::{
    PlayerAction, PlayerState, Theme, UiAction, UiState, parse_transcript, theme_class,
};
use crate::util::clog;
use yew::prelude::*;

#[derive(PartialEq, Clone)]
enum View {
    Player,
    Settings,
}

// Injected UI store (theme + loading) so components never touch a global
#[derive(Clone, PartialEq)]
pub struct UiContext {
    pub state: UiState,
    pub set_theme: Callback<Theme>,
    pub set_loading: Callback<bool>,
}

const DEMO_TRANSCRIPT: &str = r#"{
    "duration_secs": 225.0,
    "segments": [
        { "id": "seg-01", "start_secs": 0.0, "text": "Welcome back to the show. Today we are talking about how small teams ship reliable software." },
        { "id": "seg-02", "start_secs": 14.5, "text": "My guest has spent a decade maintaining infrastructure for projects you have definitely used." },
        { "id": "seg-03", "start_secs": 31.0, "text": "Thanks for having me. I think the short answer is that boring tools win more often than people admit." },
        { "id": "seg-04", "start_secs": 52.5, "text": "Let's dig into that. What does boring mean to you in practice?" },
        { "id": "seg-05", "start_secs": 63.0, "text": "It means picking the thing your whole team can debug at two in the morning, not the thing that demos well." },
        { "id": "seg-06", "start_secs": 92.0, "text": "So reliability is mostly a people problem wearing a technology costume." },
        { "id": "seg-07", "start_secs": 104.5, "text": "Exactly. The incidents that hurt are the ones where nobody on call understood the moving parts." },
        { "id": "seg-08", "start_secs": 133.0, "text": "How do you keep that understanding alive as a team grows?" },
        { "id": "seg-09", "start_secs": 148.0, "text": "Rotate people through the unglamorous work. Ownership spreads when maintenance is shared, not delegated." },
        { "id": "seg-10", "start_secs": 181.5, "text": "That is a good place to wrap. Any parting advice for listeners?" },
        { "id": "seg-11", "start_secs": 196.0, "text": "Write the runbook before the outage. Future you is the colleague you should be kindest to." }
    ]
}"#;

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Player);
    let ui = use_reducer(UiState::default);
    let player = use_reducer(PlayerState::default);
    let last_ui = use_mut_ref(|| (Theme::System, false));

    let set_theme = {
        let ui = ui.clone();
        Callback::from(move |t: Theme| ui.dispatch(UiAction::SetTheme(t)))
    };
    let set_loading = {
        let ui = ui.clone();
        Callback::from(move |l: bool| ui.dispatch(UiAction::SetLoading(l)))
    };

    // Load the transcript once on mount, with the loading flag raised
    // around the parse
    {
        let set_loading = set_loading.clone();
        let player = player.clone();
        use_effect_with((), move |_| {
            set_loading.emit(true);
            match parse_transcript(DEMO_TRANSCRIPT) {
                Ok(t) => player.dispatch(PlayerAction::SetTranscript { transcript: t }),
                Err(e) => clog(&format!("transcript parse failed: {}", e)),
            }
            set_loading.emit(false);
            || ()
        });
    }

    // Apply theme choice to the document body
    {
        let theme = ui.theme;
        use_effect_with(theme, move |_| {
            if let Some(win) = web_sys::window() {
                let system_dark = win
                    .match_media("(prefers-color-scheme: dark)")
                    .ok()
                    .flatten()
                    .map(|mq| mq.matches())
                    .unwrap_or(false);
                if let Some(body) = win.document().and_then(|d| d.body()) {
                    body.set_class_name(theme_class(theme, system_dark));
                }
            }
            || ()
        });
    }

    // Log UI store transitions
    {
        let ui = ui.clone();
        let last_ui = last_ui.clone();
        use_effect_with((ui.theme, ui.loading), move |deps| {
            let (theme, loading) = *deps;
            let mut prev = last_ui.borrow_mut();
            if prev.0 != theme {
                clog(&format!("theme: {} -> {}", prev.0.label(), theme.label()));
            }
            if prev.1 != loading {
                clog(&format!("loading: {} -> {}", prev.1, loading));
            }
            *prev = (theme, loading);
            || ()
        });
    }

    let to_player = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Player))
    };
    let to_settings = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Settings))
    };

    let ui_ctx = UiContext {
        state: *ui,
        set_theme,
        set_loading,
    };

    let content = match *view {
        View::Player => html! { <PlayerView
            player={player.clone()}
            to_settings={to_settings.clone()}
        /> },
        View::Settings => html! { <SettingsView to_player={to_player.clone()} /> },
    };

    html! { <ContextProvider<UiContext> context={ui_ctx}>{ content }</ContextProvider<UiContext>> }
}
