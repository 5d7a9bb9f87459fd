use leptos::prelude::*;

#[component]
pub fn Badge(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <span class="inline-flex items-center rounded-md bg-secondary px-2 py-0.5 text-xs font-normal text-secondary-foreground">
            {label}
        </span>
    }
}
