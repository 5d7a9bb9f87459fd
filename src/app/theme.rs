use leptos::{either::Either, prelude::*};
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::theme::{ResolvedTheme, Theme};

/// Process-wide theme state, provided once at the root.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    pub set_theme: WriteSignal<Theme>,
    pub resolved: Signal<ResolvedTheme>,
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme): (Signal<Theme>, WriteSignal<Theme>) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };

    let prefers_dark = use_preferred_dark();
    let resolved = Signal::derive(move || theme.get().resolve(prefers_dark.get()));

    // Keep the document element's class in sync with the resolved theme.
    // Effects only run in the browser, so the server never touches this.
    Effect::new(move |_| {
        let resolved = resolved.get();
        let Some(root) = document().document_element() else {
            return;
        };
        let classes = root.class_list();
        let _ = classes.remove_2("light", "dark");
        let _ = classes.add_1(resolved.as_str());
    });

    provide_context(ThemeContext {
        theme,
        set_theme,
        resolved,
    });

    children()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ThemeContext {
        set_theme, resolved, ..
    } = expect_context::<ThemeContext>();

    // Render an inert placeholder until the client has mounted so the
    // server-rendered markup and the first client render agree.
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted(true));

    view! {
        <Show when=move || mounted() fallback=|| view! { <div class="h-9 w-9"></div> }>
            <button
                type="button"
                class="relative flex h-9 w-9 items-center justify-center rounded-full transition-colors duration-300 hover:bg-secondary active:scale-95"
                aria-label="Toggle theme"
                on:click=move |_| set_theme(resolved.get_untracked().flipped().into())
            >
                {move || match resolved() {
                    ResolvedTheme::Dark => {
                        Either::Left(
                            view! {
                                <svg
                                    xmlns="http://www.w3.org/2000/svg"
                                    viewBox="0 0 24 24"
                                    fill="none"
                                    stroke="currentColor"
                                    stroke-width="1.5"
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    class="h-[18px] w-[18px]"
                                >
                                    <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" />
                                </svg>
                            },
                        )
                    }
                    ResolvedTheme::Light => {
                        Either::Right(
                            view! {
                                <svg
                                    xmlns="http://www.w3.org/2000/svg"
                                    viewBox="0 0 24 24"
                                    fill="none"
                                    stroke="currentColor"
                                    stroke-width="1.5"
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    class="h-[18px] w-[18px]"
                                >
                                    <circle cx="12" cy="12" r="4" />
                                    <path d="M12 2v2" />
                                    <path d="M12 20v2" />
                                    <path d="m4.93 4.93 1.41 1.41" />
                                    <path d="m17.66 17.66 1.41 1.41" />
                                    <path d="M2 12h2" />
                                    <path d="M20 12h2" />
                                    <path d="m6.34 17.66-1.41 1.41" />
                                    <path d="m19.07 4.93-1.41 1.41" />
                                </svg>
                            },
                        )
                    }
                }}
            </button>
        </Show>
    }
}
