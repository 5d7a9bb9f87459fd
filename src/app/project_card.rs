use leptos::{either::Either, prelude::*};

use super::components::Badge;
use super::video_dialog::VideoDialog;

/// One portfolio project. Defined at build time in the page source, never
/// mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub video: Option<&'static str>,
    pub href: Option<&'static str>,
    pub tags: &'static [&'static str],
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="group flex flex-col overflow-hidden rounded-xl border border-border bg-card transition-shadow duration-300 hover:shadow-lg md:flex-row">
            // Preview area
            <div class="relative overflow-hidden md:w-[45%] md:shrink-0">
                {match project.video {
                    Some(video) => {
                        Either::Left(
                            view! {
                                <VideoDialog
                                    poster_src=project.image
                                    video_src=video
                                    poster_alt=project.title
                                    class="md:aspect-auto md:h-full"
                                />
                            },
                        )
                    }
                    None => {
                        Either::Right(
                            view! {
                                <div class="relative aspect-[16/9] overflow-hidden rounded-t-lg md:aspect-auto md:h-full md:rounded-l-lg md:rounded-t-none">
                                    <img
                                        src=project.image
                                        alt=project.title
                                        loading="lazy"
                                        class="absolute inset-0 h-full w-full object-cover transition-transform duration-500 group-hover:scale-105"
                                    />
                                </div>
                            },
                        )
                    }
                }}
            </div>

            // Content
            <div class="flex flex-1 flex-col gap-3 p-5 md:px-6 md:py-6">
                <div class="flex flex-wrap gap-1.5">
                    {project
                        .tags
                        .iter()
                        .map(|tag| view! { <Badge label=*tag /> })
                        .collect_view()}
                </div>

                <div class="flex-1">
                    <h3 class="font-display text-lg font-semibold tracking-tight">
                        {project.title}
                    </h3>
                    <p class="mt-1.5 text-sm leading-relaxed text-muted-foreground">
                        {project.description}
                    </p>
                </div>

                {project
                    .href
                    .map(|href| {
                        let external = href.starts_with("http");
                        view! {
                            <a
                                href=href
                                target=external.then_some("_blank")
                                rel=external.then_some("noopener noreferrer")
                                class="inline-flex items-center gap-1.5 text-sm font-medium text-foreground underline-offset-4 transition-colors hover:underline"
                            >
                                "View project"
                                <svg
                                    viewBox="0 0 24 24"
                                    fill="none"
                                    stroke="currentColor"
                                    stroke-width="2"
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    class="h-3.5 w-3.5"
                                >
                                    <path d="M7 7h10v10" />
                                    <path d="M7 17 17 7" />
                                </svg>
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}
