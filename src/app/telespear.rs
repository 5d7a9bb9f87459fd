use leptos::{either::Either, ev, html, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_document, use_event_listener};

const GAME_URL: &str =
    "https://r2.deskfluence.com/personal-site/projects/telespear/SuperTeleSpear.html";

const GAME_CONTROLS: [(&str, &str); 6] = [
    ("WASD / Arrow Keys", "Move"),
    ("Space", "Jump"),
    ("Mouse", "Aim"),
    ("Left Click", "Throw spear / Teleport"),
    ("Right Click", "Retract spear"),
    ("Esc", "Pause / Menu"),
];

#[component]
pub fn TeleSpearPage() -> impl IntoView {
    let container_ref = NodeRef::<html::Div>::new();
    let (is_fullscreen, set_is_fullscreen) = signal(false);

    // The icon follows the platform's fullscreen state, which can change
    // without the toggle (Esc, system UI)
    let _ = use_event_listener(
        use_document(),
        ev::Custom::<web_sys::Event>::new("fullscreenchange"),
        move |_| set_is_fullscreen(document().fullscreen_element().is_some()),
    );

    let toggle_fullscreen = move |_| {
        let Some(container) = container_ref.get_untracked() else {
            return;
        };
        if document().fullscreen_element().is_none() {
            let _ = container.request_fullscreen();
        } else {
            document().exit_fullscreen();
        }
    };

    view! {
        <Title text="SuperTeleSpear" />
        <div class="mx-auto max-w-5xl px-6">
            <section class="pb-8 pt-24 md:pt-36">
                <h1 class="font-display text-4xl font-bold tracking-tight sm:text-5xl">
                    "SuperTeleSpear"
                </h1>
                <p class="mt-4 max-w-2xl text-lg leading-relaxed text-muted-foreground">
                    "A technical platformer built in Godot. Throw your spear, then teleport to it. Chain movement to clear levels as fast as possible. Deterministic physics enable replays and ghost training for speedrunning."
                </p>
                <div class="mt-6 flex gap-3">
                    <a
                        href="https://r2.deskfluence.com/personal-site/projects/telespear/SuperTeleSpear.dmg"
                        download=""
                        class="inline-flex items-center gap-2 rounded-lg border border-border bg-card px-4 py-2 text-sm font-medium transition-colors hover:bg-secondary"
                    >
                        <svg class="h-4 w-4" viewBox="0 0 384 512" fill="currentColor">
                            <path d="M318.7 268.7c-.2-36.7 16.4-64.4 50-84.8-18.8-26.9-47.2-41.7-84.7-44.6-35.5-2.8-74.3 20.7-88.5 20.7-15 0-49.4-19.7-76.4-19.7C63.3 141.2 4 184.8 4 273.5q0 39.3 14.4 81.2c12.8 36.7 59 126.7 107.2 125.2 25.2-.6 43-17.9 75.8-17.9 31.8 0 48.3 17.9 76.4 17.9 48.6-.7 90.4-82.5 102.6-119.3-65.2-30.7-61.7-90-61.7-91.9zm-56.6-164.2c27.3-32.4 24.8-62.1 24-72.5-24.1 1.4-52 16.4-67.9 34.9-17.5 19.8-27.8 44.3-25.6 71.9 26.1 2 49.9-11.4 69.5-34.3z" />
                        </svg>
                        "Mac"
                    </a>
                    <a
                        href="https://r2.deskfluence.com/personal-site/projects/telespear/SuperTeleSpear.exe.zip"
                        download=""
                        class="inline-flex items-center gap-2 rounded-lg border border-border bg-card px-4 py-2 text-sm font-medium transition-colors hover:bg-secondary"
                    >
                        <svg class="h-4 w-4" viewBox="0 0 448 512" fill="currentColor">
                            <path d="M0 93.7l183.6-25.3v177.4H0V93.7zm0 324.6l183.6 25.3V268.4H0v149.9zm203.8 28L448 480V268.4H203.8v177.9zm0-380.6v180.1H448V32L203.8 65.7z" />
                        </svg>
                        "Windows"
                    </a>
                </div>
            </section>

            // Game embed
            <section class="pb-8">
                <div
                    node_ref=container_ref
                    class="relative overflow-hidden rounded-xl border border-border bg-black"
                >
                    <iframe
                        src=GAME_URL
                        class=move || {
                            if is_fullscreen() { "h-full w-full" } else { "aspect-[16/9] w-full" }
                        }
                        allow="fullscreen; autoplay; gamepad"
                        allowfullscreen=true
                    ></iframe>
                    <button
                        class="absolute bottom-3 right-3 rounded-lg bg-black/30 p-2 text-white backdrop-blur-md transition-transform hover:scale-110"
                        aria-label="Toggle fullscreen"
                        on:click=toggle_fullscreen
                    >
                        {move || {
                            if is_fullscreen() {
                                Either::Left(
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
                                            <path d="M8 3v3a2 2 0 0 1-2 2H3" />
                                            <path d="M21 8h-3a2 2 0 0 1-2-2V3" />
                                            <path d="M3 16h3a2 2 0 0 1 2 2v3" />
                                            <path d="M16 21v-3a2 2 0 0 1 2-2h3" />
                                        </svg>
                                    },
                                )
                            } else {
                                Either::Right(
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
                                            <path d="M8 3H5a2 2 0 0 0-2 2v3" />
                                            <path d="M21 8V5a2 2 0 0 0-2-2h-3" />
                                            <path d="M3 16v3a2 2 0 0 0 2 2h3" />
                                            <path d="M16 21h3a2 2 0 0 0 2-2v-3" />
                                        </svg>
                                    },
                                )
                            }
                        }}
                    </button>
                </div>
            </section>

            // Controls
            <section class="pb-24">
                <h2 class="font-display text-xl font-semibold tracking-tight">"Controls"</h2>
                <div class="mt-4 grid grid-cols-2 gap-x-8 gap-y-2 sm:grid-cols-3">
                    {GAME_CONTROLS
                        .iter()
                        .map(|(key, action)| {
                            view! {
                                <div class="flex items-baseline gap-2 text-sm">
                                    <kbd class="rounded border border-border bg-muted px-1.5 py-0.5 font-mono text-xs">
                                        {*key}
                                    </kbd>
                                    <span class="text-muted-foreground">{*action}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
