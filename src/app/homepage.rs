use leptos::prelude::*;
use leptos_meta::Title;

use super::project_card::{Project, ProjectCard};

static PROJECTS: [Project; 3] = [
    Project {
        title: "HazelDesk",
        description: "An all-in-one business management platform for salons, spas, and wellness professionals. Built end-to-end as a solo founder, owning everything from product design and full-stack development to ad campaigns and customer support. Features scheduling, online booking, a website builder, e-commerce, and analytics.",
        image: "https://r2.deskfluence.com/landing/v2_0/hero_schedule.png",
        video: Some("https://r2.deskfluence.com/landing/meet_hazeldesk.mp4"),
        href: Some("https://hazeldesk.com"),
        tags: &["SaaS", "Next.js", "TypeScript", "PostgreSQL"],
    },
    Project {
        title: "Ambient Hopecore ¯\\_(ツ)_/¯",
        description: "A small modular synth patch made in VCV rack. Randomly generated music and modular design; just a small hobby that combine my love of music production and coding.",
        image: "https://r2.deskfluence.com/personal-site/projects/vcv-36/preview.png",
        video: Some("https://r2.deskfluence.com/personal-site/projects/vcv-36/recording.mp4"),
        href: None,
        tags: &["VCV Rack", "Modular Synths", "Ambient"],
    },
    Project {
        title: "SuperTeleSpear",
        description: "A technical platformer built in Godot. Throw your spear, then teleport to it. Chain movement to clear levels as fast as possible. Deterministic physics enable replays and ghost training for speedrunning.",
        image: "https://r2.deskfluence.com/personal-site/projects/telespear/screenshot.png",
        video: Some("https://r2.deskfluence.com/personal-site/projects/telespear/recording.mp4"),
        href: Some("/projects/telespear"),
        tags: &["Godot", "GDScript", "Indie Game Dev"],
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="mx-auto max-w-5xl px-6">
            // Hero
            <section class="pb-16 pt-24 md:pb-24 md:pt-36">
                <h1 class="font-display text-4xl font-bold tracking-tight sm:text-5xl md:text-6xl">
                    "Nick Manna"
                </h1>
                <p class="mt-4 max-w-xl text-lg text-muted-foreground md:text-xl">
                    "Developer, designer, and coffee enthusiast." <br />
                    "I make things and sometimes write about them."
                </p>
            </section>

            // Projects
            <section class="pb-24">
                <h2 class="font-display text-2xl font-semibold tracking-tight">
                    "Recent Projects"
                </h2>
                <div class="mt-8 grid gap-6">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project /> })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
