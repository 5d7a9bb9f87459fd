use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <Title text="Blog" />
        <div class="mx-auto max-w-3xl px-6">
            <section class="pb-24 pt-24 md:pt-36">
                <h1 class="font-display text-4xl font-bold tracking-tight sm:text-5xl">"Blog"</h1>
                <p class="mt-4 text-lg text-muted-foreground">
                    "Nothing here yet. Check back soon."
                </p>
            </section>
        </div>
    }
}
