mod about;
mod blog;
mod components;
mod homepage;
mod navbar;
mod project_card;
mod telespear;
mod theme;
mod video_dialog;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutPage;
use blog::BlogPage;
use homepage::HomePage;
use navbar::Navbar;
use telespear::TeleSpearPage;
use theme::ThemeProvider;

/// Applies the stored theme class before hydration so reloads don't flash
/// the wrong color scheme. Storage format matches the provider's codec.
const THEME_INIT_SCRIPT: &str = r#"
(function () {
  try {
    var stored = JSON.parse(window.localStorage.getItem("theme"));
    var dark =
      stored === "Dark" ||
      ((stored === null || stored === "System") &&
        window.matchMedia("(prefers-color-scheme: dark)").matches);
    document.documentElement.classList.add(dark ? "dark" : "light");
  } catch (e) {}
})();
"#;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/nmanna-site.css" />
                <script inner_html=THEME_INIT_SCRIPT></script>
                <MetaTags />
            </head>
            <body class="font-sans antialiased bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("{title} | Nick Manna") />

        <Router>
            <ThemeProvider>
                <Navbar />
                <main class="min-h-screen">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/blog") view=BlogPage />
                        <Route path=path!("/projects/telespear") view=TeleSpearPage />
                    </Routes>
                </main>
                <Footer />
            </ThemeProvider>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-border/50 py-8">
            <div class="mx-auto flex max-w-5xl items-center justify-between px-6">
                <p class="text-sm text-muted-foreground">
                    "© " {env!("BUILD_YEAR")} " Nicholas Manna"
                </p>
                <div class="flex items-center gap-3">
                    <a
                        href="https://www.linkedin.com/in/nick-manna"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="LinkedIn"
                        class="text-muted-foreground transition-colors hover:text-foreground"
                    >
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="18"
                            height="18"
                            viewBox="0 0 24 24"
                            fill="currentColor"
                        >
                            <path d="M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433a2.062 2.062 0 0 1-2.063-2.065 2.064 2.064 0 1 1 2.063 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z" />
                        </svg>
                    </a>
                    <a
                        href="mailto:nick@frontdeskify.com"
                        aria-label="Email"
                        class="text-muted-foreground transition-colors hover:text-foreground"
                    >
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="18"
                            height="18"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        >
                            <rect width="20" height="16" x="2" y="4" rx="2" />
                            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
                        </svg>
                    </a>
                </div>
            </div>
        </footer>
    }
}
