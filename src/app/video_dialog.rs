use leptos::{ev, html, prelude::*, task::spawn_local};
use leptos_use::{
    use_document, use_event_listener, use_media_query, use_raf_fn_with_options, use_timeout_fn,
    utils::Pausable, UseRafFnOptions, UseTimeoutFnReturn,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::playback::{
    seek_position_secs, seek_ratio, PlaybackState, ProgressUpdate, CONTROLS_HIDE_DELAY_MS,
};

/// Poster image that turns into a playable video on activation.
///
/// Pointer devices get an in-page modal with custom controls. Touch devices
/// get the platform's native fullscreen player via a hidden video element,
/// falling back to the modal when the platform refuses playback.
#[component]
pub fn VideoDialog(
    #[prop(into)] poster_src: String,
    #[prop(into)] video_src: String,
    #[prop(into, default = String::from("Preview"))] poster_alt: String,
    #[prop(into, default = String::from("16/9"))] aspect_ratio: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let state = RwSignal::new(PlaybackState::new());
    let video_ref = NodeRef::<html::Video>::new();
    let mobile_video_ref = NodeRef::<html::Video>::new();
    let seek_bar_ref = NodeRef::<html::Div>::new();

    let is_coarse_pointer = use_media_query("(pointer: coarse)");

    // Per-frame progress poll. Paused until the modal video has data and
    // whenever the dialog is closed; the Poll request type loses authority
    // to the seek drag while `seeking` is set.
    let Pausable {
        pause: pause_poll,
        resume: resume_poll,
        ..
    } = use_raf_fn_with_options(
        move |_| {
            let Some(video) = video_ref.get_untracked() else {
                return;
            };
            let duration = video.duration();
            if duration.is_finite() && duration > 0.0 {
                let ratio = video.current_time() / duration;
                state.update(|s| s.apply_progress(ProgressUpdate::Poll(ratio)));
            }
        },
        UseRafFnOptions::default().immediate(false),
    );

    let close = Callback::new({
        let pause_poll = pause_poll.clone();
        move |()| {
            state.update(|s| s.close());
            if let Some(video) = video_ref.get_untracked() {
                let _ = video.pause();
                video.set_current_time(0.0);
            }
            pause_poll();
        }
    });

    // Escape closes the modal while it is open
    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if state.with_untracked(|s| s.open) && ev.key() == "Escape" {
            close.run(());
        }
    });

    // The open modal locks page scrolling; closing releases it
    Effect::new(move |_| {
        let open = state.with(|s| s.open);
        let Some(body) = document().body() else {
            return;
        };
        let style = body.style();
        if open {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    });
    on_cleanup(|| {
        #[cfg(feature = "hydrate")]
        if let Some(body) = document().body() {
            let _ = body.style().remove_property("overflow");
        }
    });

    let open_dialog = move |_| {
        if is_coarse_pointer.get_untracked() {
            if let Some(video) = mobile_video_ref.get_untracked() {
                video.set_current_time(0.0);
                match video.play() {
                    Ok(promise) => {
                        spawn_local(async move {
                            match JsFuture::from(promise).await {
                                Ok(_) => {
                                    if let Err(err) = enter_native_fullscreen(&video) {
                                        log::debug!("native fullscreen rejected: {err:?}");
                                        state.update(|s| s.open());
                                    }
                                }
                                Err(err) => {
                                    log::debug!("native playback rejected: {err:?}");
                                    state.update(|s| s.open());
                                }
                            }
                        });
                    }
                    Err(_) => state.update(|s| s.open()),
                }
                return;
            }
        }
        state.update(|s| s.open());
    };

    // When the platform kicks the hidden video out of fullscreen, reset it
    // so the next open starts from the beginning
    let reset_mobile_video = move || {
        if let Some(video) = mobile_video_ref.get_untracked() {
            let _ = video.pause();
            video.set_current_time(0.0);
        }
    };
    // iOS fires this when leaving native video fullscreen
    let _ = use_event_listener(
        mobile_video_ref,
        ev::Custom::<web_sys::Event>::new("webkitendfullscreen"),
        move |_| reset_mobile_video(),
    );
    let _ = use_event_listener(
        use_document(),
        ev::Custom::<web_sys::Event>::new("fullscreenchange"),
        move |_| {
            if document().fullscreen_element().is_none() {
                reset_mobile_video();
            }
        },
    );

    let seek_to_client_x = move |client_x: f64| {
        let Some(bar) = seek_bar_ref.get_untracked() else {
            return;
        };
        let rect = bar.get_bounding_client_rect();
        let ratio = seek_ratio(client_x, rect.left(), rect.width());
        if let Some(video) = video_ref.get_untracked() {
            let duration = video.duration();
            if duration.is_finite() && duration > 0.0 {
                video.set_current_time(seek_position_secs(ratio, duration));
            }
        }
        state.update(|s| s.apply_progress(ProgressUpdate::Seek(ratio)));
    };

    // The drag continues anywhere in the document until the button is
    // released; the `seeking` flag gates both listeners
    let _ = use_event_listener(use_document(), ev::mousemove, move |ev| {
        if state.with_untracked(|s| s.seeking) {
            seek_to_client_x(ev.client_x() as f64);
        }
    });
    let _ = use_event_listener(use_document(), ev::mouseup, move |_| {
        if state.with_untracked(|s| s.seeking) {
            state.update(|s| s.end_seek());
        }
    });

    let UseTimeoutFnReturn {
        start: start_hide_timer,
        stop: stop_hide_timer,
        ..
    } = use_timeout_fn(
        move |_: ()| state.update(|s| s.hide_controls()),
        CONTROLS_HIDE_DELAY_MS,
    );
    let on_modal_mouse_move = move |_| {
        state.update(|s| s.show_controls());
        stop_hide_timer();
        start_hide_timer(());
    };

    let on_video_load = {
        let resume_poll = resume_poll.clone();
        move |_| {
            if let Some(video) = video_ref.get_untracked() {
                let _ = video.play();
                state.update(|s| s.set_playing(true));
                resume_poll();
            }
        }
    };

    let toggle_play = move |_| {
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        if state.with_untracked(|s| s.playing) {
            let _ = video.pause();
        } else {
            let _ = video.play();
        }
        state.update(|s| s.toggle_playing());
    };

    let toggle_mute = move |_| {
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        video.set_muted(!state.with_untracked(|s| s.muted));
        state.update(|s| s.toggle_muted());
    };

    let trigger_class = format!(
        "group relative block w-full overflow-hidden rounded-t-lg focus:outline-none md:rounded-l-lg md:rounded-t-none {class}"
    );
    let modal_video_src = video_src.clone();

    view! {
        // Poster / trigger
        <button
            type="button"
            class=trigger_class
            style:aspect-ratio=aspect_ratio
            on:click=open_dialog
        >
            <img
                src=poster_src
                alt=poster_alt
                loading="lazy"
                class="absolute inset-0 h-full w-full object-cover transition-transform duration-500 group-hover:scale-105"
            />
            <div class="absolute inset-0 flex items-center justify-center bg-black/0 transition-all duration-300 group-hover:bg-black/20">
                <div class="flex h-14 w-14 items-center justify-center rounded-full bg-white/90 shadow-lg transition-transform duration-300 group-hover:scale-110">
                    <svg
                        viewBox="0 0 24 24"
                        fill="currentColor"
                        class="ml-0.5 h-6 w-6 text-black"
                    >
                        <polygon points="6 3 20 12 6 21 6 3" />
                    </svg>
                </div>
            </div>
        </button>

        // Hidden video for touch-device native fullscreen
        <video
            node_ref=mobile_video_ref
            src=video_src
            controls=true
            playsinline=true
            preload="metadata"
            class="fixed -left-[9999px] -top-[9999px] h-px w-px"
        ></video>

        // Video overlay (pointer devices)
        <Show when=move || state.with(|s| s.open)>
            <div
                class="fixed inset-0 z-[100] flex items-center justify-center bg-black/90 backdrop-blur-sm dark:bg-black/80"
                on:click=move |_| close.run(())
            >
                <div
                    class="relative aspect-video w-[90vw] max-w-[1200px] overflow-hidden rounded-lg bg-black"
                    on:click=|ev| ev.stop_propagation()
                    on:mousemove=on_modal_mouse_move.clone()
                    on:mouseleave=move |_| state.update(|s| s.hide_controls())
                >
                    <video
                        node_ref=video_ref
                        src=modal_video_src.clone()
                        class="h-full w-full object-contain"
                        playsinline=true
                        on:loadeddata=on_video_load.clone()
                    ></video>

                    <Show when=move || state.with(|s| s.controls_visible)>
                        // Close button
                        <button
                            class="absolute right-4 top-4 z-10 rounded-full bg-black/30 p-2 text-white backdrop-blur-md transition-transform hover:scale-110"
                            on:click=move |_| close.run(())
                        >
                            <svg
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                class="h-5 w-5"
                            >
                                <path d="M18 6 6 18" />
                                <path d="m6 6 12 12" />
                            </svg>
                        </button>

                        // Bottom controls
                        <div class="absolute bottom-0 left-0 right-0 rounded-b-lg bg-black/30 px-5 pb-4 pt-4 text-white backdrop-blur-md">
                            // Seek bar
                            <div
                                node_ref=seek_bar_ref
                                class="group/seek mb-3 flex h-3 cursor-pointer items-center"
                                on:mousedown=move |ev| {
                                    state.update(|s| s.begin_seek());
                                    seek_to_client_x(ev.client_x() as f64);
                                }
                            >
                                <div class="relative h-1 w-full rounded-full bg-white/30 transition-all group-hover/seek:h-1.5">
                                    <div
                                        class="absolute inset-y-0 left-0 rounded-full bg-white"
                                        style:width=move || {
                                            format!("{}%", state.with(|s| s.progress) * 100.0)
                                        }
                                    ></div>
                                </div>
                            </div>

                            <div class="flex items-center gap-3">
                                <button
                                    class="transition-transform hover:scale-110"
                                    on:click=toggle_play
                                >
                                    {move || {
                                        if state.with(|s| s.playing) {
                                            leptos::either::Either::Left(
                                                view! {
                                                    <svg
                                                        viewBox="0 0 24 24"
                                                        fill="currentColor"
                                                        class="h-5 w-5"
                                                    >
                                                        <rect x="6" y="4" width="4" height="16" rx="1" />
                                                        <rect x="14" y="4" width="4" height="16" rx="1" />
                                                    </svg>
                                                },
                                            )
                                        } else {
                                            leptos::either::Either::Right(
                                                view! {
                                                    <svg
                                                        viewBox="0 0 24 24"
                                                        fill="currentColor"
                                                        class="h-5 w-5"
                                                    >
                                                        <polygon points="6 3 20 12 6 21 6 3" />
                                                    </svg>
                                                },
                                            )
                                        }
                                    }}
                                </button>
                                <button
                                    class="transition-transform hover:scale-110"
                                    on:click=toggle_mute
                                >
                                    {move || {
                                        if state.with(|s| s.muted) {
                                            leptos::either::Either::Left(
                                                view! {
                                                    <svg
                                                        viewBox="0 0 24 24"
                                                        fill="none"
                                                        stroke="currentColor"
                                                        stroke-width="2"
                                                        stroke-linecap="round"
                                                        stroke-linejoin="round"
                                                        class="h-5 w-5"
                                                    >
                                                        <polygon points="11 5 6 9 2 9 2 15 6 15 11 19 11 5" />
                                                        <line x1="22" x2="16" y1="9" y2="15" />
                                                        <line x1="16" x2="22" y1="9" y2="15" />
                                                    </svg>
                                                },
                                            )
                                        } else {
                                            leptos::either::Either::Right(
                                                view! {
                                                    <svg
                                                        viewBox="0 0 24 24"
                                                        fill="none"
                                                        stroke="currentColor"
                                                        stroke-width="2"
                                                        stroke-linecap="round"
                                                        stroke-linejoin="round"
                                                        class="h-5 w-5"
                                                    >
                                                        <polygon points="11 5 6 9 2 9 2 15 6 15 11 19 11 5" />
                                                        <path d="M15.54 8.46a5 5 0 0 1 0 7.07" />
                                                        <path d="M19.07 4.93a10 10 0 0 1 0 14.14" />
                                                    </svg>
                                                },
                                            )
                                        }
                                    }}
                                </button>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

/// iOS only exposes fullscreen video playback through the vendor-prefixed
/// `webkitEnterFullscreen`; everything else gets the standard API.
fn enter_native_fullscreen(video: &web_sys::HtmlVideoElement) -> Result<(), JsValue> {
    let target: &JsValue = video.as_ref();
    let hook = js_sys::Reflect::get(target, &JsValue::from_str("webkitEnterFullscreen"))?;
    if let Some(func) = hook.dyn_ref::<js_sys::Function>() {
        func.call0(target)?;
        return Ok(());
    }
    video.request_fullscreen()
}
