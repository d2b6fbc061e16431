use super::app::UiContext;
use super::loading_overlay::LoadingOverlay;
use super::time_display::TimeDisplay;
use super::transcript_panel::TranscriptPanel;
use crate::model::{PlayerAction, PlayerState};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;

/// Ticker cadence; position advances in quarter-second steps so the
/// display exercises fractional positions between whole seconds.
const TICK_MS: i32 = 250;
const TICK_DT: f64 = 0.25;

#[derive(Properties, PartialEq, Clone)]
pub struct PlayerViewProps {
    pub player: UseReducerHandle<PlayerState>,
    pub to_settings: Callback<()>,
}

#[function_component(PlayerView)]
pub fn player_view(props: &PlayerViewProps) -> Html {
    let ctx = use_context::<UiContext>().expect("UiContext not provided");

    {
        // Playback ticker + Space shortcut, cleaned up on unmount
        let player = props.player.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let player2 = player.clone();
            let tick = Closure::wrap(Box::new(move || {
                player2.dispatch(PlayerAction::Tick { dt: TICK_DT });
            }) as Box<dyn FnMut()>);
            let id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    TICK_MS,
                )
                .unwrap();
            let key_cb = {
                let player = player.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.code() == "Space" {
                        e.prevent_default();
                        player.dispatch(PlayerAction::TogglePlay);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
                .unwrap();
            move || {
                window.clear_interval_with_handle(id);
                let _ = window.remove_event_listener_with_callback(
                    "keydown",
                    key_cb.as_ref().unchecked_ref(),
                );
                drop(key_cb);
                drop(tick);
            }
        });
    }

    let position = props.player.position_secs;
    let duration = props.player.duration_secs;
    let active_index = props.player.active_segment_index();
    let play_label = if props.player.playing {
        "Pause (Space)"
    } else {
        "Play (Space)"
    };

    let toggle_play = {
        let player = props.player.clone();
        Callback::from(move |_| player.dispatch(PlayerAction::TogglePlay))
    };
    let to_settings_click = {
        let cb = props.to_settings.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_seek = {
        let player = props.player.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(target) = e.current_target() else {
                return;
            };
            let Ok(el) = target.dyn_into::<HtmlElement>() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            if rect.width() <= 0.0 {
                return;
            }
            let frac = ((e.client_x() as f64 - rect.left()) / rect.width()).clamp(0.0, 1.0);
            player.dispatch(PlayerAction::SeekTo {
                secs: frac * player.duration_secs,
            });
        })
    };
    let on_select = {
        let player = props.player.clone();
        Callback::from(move |i: usize| {
            if let Some(seg) = player.segments.get(i) {
                player.dispatch(PlayerAction::SeekTo {
                    secs: seg.start_secs,
                });
            }
        })
    };

    let progress_pct = if duration > 0.0 {
        (position / duration * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    html! {
        <div style="position:relative; width:100vw; height:100vh;">
            <div style="position:absolute; top:12px; left:50%; transform:translateX(-50%);">
                <TimeDisplay
                    position_secs={position}
                    duration_secs={duration}
                    play_label={play_label.to_string()}
                    on_toggle_play={toggle_play}
                />
            </div>
            <div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; flex-direction:column; gap:6px;">
                <button onclick={to_settings_click}>{"Settings"}</button>
            </div>
            <div style="max-width:640px; margin:0 auto; padding-top:96px; display:flex; flex-direction:column; gap:16px;">
                <div onclick={on_seek} style="height:10px; background:#21262d; border:1px solid #30363d; border-radius:5px; cursor:pointer;">
                    <div style={format!("height:100%; width:{progress_pct}%; background:#58a6ff; border-radius:5px;")}></div>
                </div>
                <TranscriptPanel
                    segments={props.player.segments.clone()}
                    active_index={active_index}
                    on_select={on_select}
                />
            </div>
            <LoadingOverlay show={ctx.state.loading} />
        </div>
    }
}
