use leptos::{either::Either, prelude::*};
use leptos_router::{components::*, hooks::use_location};

use super::theme::ThemeToggle;

const NAV_LINKS: [(&str, &str); 2] = [("/", "Home"), ("/about", "About")];

/// Whether `href` is the link to highlight for the current route. Trailing
/// slashes are insignificant, so "/about/" still highlights "/about".
fn is_active(pathname: &str, href: &str) -> bool {
    pathname.trim_end_matches('/') == href.trim_end_matches('/')
}

#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let (mobile_open, set_mobile_open) = signal(false);

    // Activating a link navigates, and navigation closes the mobile menu
    Effect::watch(
        move || pathname.get(),
        move |_, _, _| set_mobile_open(false),
        false,
    );

    view! {
        <header class="sticky top-0 z-50 w-full border-b border-border/50 bg-background/80 backdrop-blur-xl">
            <nav class="mx-auto flex h-16 max-w-5xl items-center justify-between px-6">
                <A href="/" attr:class="font-display text-lg font-semibold tracking-tight">
                    "nm."
                </A>

                // Desktop nav
                <div class="hidden items-center gap-1 md:flex">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            let href = *href;
                            view! {
                                <A
                                    href=href
                                    attr:class=move || {
                                        if is_active(&pathname(), href) {
                                            "relative rounded-md bg-secondary px-4 py-2 text-sm text-foreground transition-colors"
                                        } else {
                                            "relative px-4 py-2 text-sm text-muted-foreground transition-colors hover:text-foreground"
                                        }
                                    }
                                >
                                    {*label}
                                </A>
                            }
                        })
                        .collect_view()}
                    <div class="ml-4 border-l border-border pl-4">
                        <ThemeToggle />
                    </div>
                </div>

                // Mobile nav toggle
                <div class="flex items-center gap-2 md:hidden">
                    <ThemeToggle />
                    <button
                        type="button"
                        class="flex h-9 w-9 items-center justify-center rounded-full hover:bg-secondary"
                        aria-label="Toggle menu"
                        on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                    >
                        {move || {
                            if mobile_open() {
                                Either::Left(
                                    view! {
                                        <svg
                                            xmlns="http://www.w3.org/2000/svg"
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
                                    },
                                )
                            } else {
                                Either::Right(
                                    view! {
                                        <svg
                                            xmlns="http://www.w3.org/2000/svg"
                                            viewBox="0 0 24 24"
                                            fill="none"
                                            stroke="currentColor"
                                            stroke-width="2"
                                            stroke-linecap="round"
                                            stroke-linejoin="round"
                                            class="h-5 w-5"
                                        >
                                            <line x1="4" x2="20" y1="6" y2="6" />
                                            <line x1="4" x2="20" y1="12" y2="12" />
                                            <line x1="4" x2="20" y1="18" y2="18" />
                                        </svg>
                                    },
                                )
                            }
                        }}
                    </button>
                </div>
            </nav>

            // Mobile nav menu
            <Show when=move || mobile_open()>
                <div class="border-b border-border bg-background px-6 py-4 md:hidden">
                    <div class="flex flex-col gap-1">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| {
                                let href = *href;
                                view! {
                                    <A
                                        href=href
                                        attr:class=move || {
                                            if is_active(&pathname(), href) {
                                                "rounded-md bg-secondary px-3 py-2 text-sm text-foreground transition-colors"
                                            } else {
                                                "rounded-md px-3 py-2 text-sm text-muted-foreground transition-colors hover:bg-secondary hover:text-foreground"
                                            }
                                        }
                                    >
                                        {*label}
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_link_active_per_route() {
        for pathname in ["/", "/about"] {
            let active = NAV_LINKS
                .iter()
                .filter(|(href, _)| is_active(pathname, href))
                .count();
            assert_eq!(active, 1, "route {pathname} should highlight one link");
        }
    }

    #[test]
    fn test_trailing_slashes_are_insignificant() {
        assert!(is_active("/about/", "/about"));
        assert!(is_active("/about", "/about"));
        assert!(!is_active("/about/", "/"));
    }

    #[test]
    fn test_unlisted_routes_highlight_nothing() {
        for pathname in ["/blog", "/projects/telespear", "/missing"] {
            let active = NAV_LINKS
                .iter()
                .filter(|(href, _)| is_active(pathname, href))
                .count();
            assert_eq!(active, 0, "route {pathname} should highlight no link");
        }
    }
}
