use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use super::components::Badge;

/// One entry in the work-history timeline. An empty `end_date` means the
/// start string already carries the full range.
struct WorkEntry {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    start_date: &'static str,
    end_date: &'static str,
    tags: &'static [&'static str],
    description: &'static [&'static str],
}

static WORK_HISTORY: [WorkEntry; 7] = [
    WorkEntry {
        title: "Founder / Developer",
        company: "Frontdeskify Inc",
        location: "Toronto, ON",
        start_date: "Jan 2024",
        end_date: "Present",
        tags: &["SaaS", "Next.js", "TypeScript", "PostgreSQL", "Stripe", "PayPal", "Tailwind"],
        description: &[
            "Built full-stack SaaS from zero to live product in 6 months, now serving 200+ businesses.",
            "Conducted customer discovery with 10 service business owners to shape product direction.",
            "Architected multi-tenant platform with white-label websites, custom domains, and payment processing (Stripe, PayPal, Apple Pay, Google Pay).",
            "Built email infrastructure on AWS SES with scheduling, bounce handling, and compliance (GDPR, CAN-SPAM).",
        ],
    },
    WorkEntry {
        title: "Product Team Lead / Director of Shared Infrastructure / Server Developer",
        company: "GameHive Corporation",
        location: "Toronto, ON",
        start_date: "Jul 2018",
        end_date: "Dec 2023",
        tags: &["Python", "Kubernetes", "GCP", "AWS", "PostgreSQL", "Redis", "Terraform"],
        description: &[
            "Proposed and built two new teams from scratch: a 5-developer product team and a DevOps-focused Shared Infrastructure team.",
            "Led product team to launch a new mobile game title in 4 months, capitalizing on first-mover advantage.",
            "Took company from zero BI to full analytics and A/B testing capability, then hired a dedicated BI team to scale and own the function.",
            "Saved $40K+/month through backend optimization of legacy services.",
            "Built scalable game server infrastructure handling 300k+ DAU with 99.99% uptime and sub-3-minute deployments.",
        ],
    },
    WorkEntry {
        title: "Software Developer",
        company: "Apple Inc",
        location: "Cupertino, CA",
        start_date: "Sep – Dec 2016; May – Aug 2017",
        end_date: "",
        tags: &["Python", "Swift", "Objective-C"],
        description: &[
            "Authored ApplePay terminal certification spec, adopted by 2 major payment terminal manufacturers.",
            "Designed distributed async testing architecture, adopted by 8 internal teams.",
            "Authored test plan for new iOS accessory platform, accepted for implementation.",
        ],
    },
    WorkEntry {
        title: "Firmware Engineer",
        company: "Otto LLC",
        location: "Burlingame, CA",
        start_date: "Sep 2015",
        end_date: "Dec 2015",
        tags: &["C", "FreeRTOS", "I2C", "SPI", "HomeKit"],
        description: &[
            "Wrote low-level I2C, SPI and peripheral drivers for an IoT product on FreeRTOS.",
            "Implemented Bonjour, IPv6, and MFi Authentication for Apple HomeKit integration.",
            "Architected and built an automated testing platform.",
        ],
    },
    WorkEntry {
        title: "Software Designer",
        company: "Evertz Microsystems Inc",
        location: "Burlington, ON",
        start_date: "May - Sep 2014; Jan – May 2015",
        end_date: "",
        tags: &["Python", "Linux", "Bash"],
        description: &[
            "Reduced automated build time from 30 minutes to 2 minutes.",
            "Developed a wrapper for KVM hypervisor for VM cluster management.",
            "Implemented features in Python control layer for high-performance video replay device (used at 2015 Super Bowl).",
            "Owned Continuous Integration platform and development servers.",
        ],
    },
    WorkEntry {
        title: "Software Developer",
        company: "Autodesk Inc",
        location: "Montreal, QC",
        start_date: "Sep 2013",
        end_date: "Dec 2013",
        tags: &["C++", "Qt", "Python", "Perl"],
        description: &[
            "Pioneered CI and build automation system scalable to 100+ Autodesk products.",
            "Built internal tools for developer productivity in C++/Qt.",
        ],
    },
    WorkEntry {
        title: "Software Developer",
        company: "EXO U Inc",
        location: "Montreal, QC",
        start_date: "Feb 2013",
        end_date: "May 2013",
        tags: &["Jenkins", "Bash", "Javascript", "PHP"],
        description: &[
            "Implemented cloud solution for distributed automated testing.",
            "Owned CI, automated building, and Git migration.",
        ],
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <div class="mx-auto max-w-3xl px-6">
            // Bio
            <section class="pb-16 pt-24 md:pb-20 md:pt-36">
                <h1 class="font-display text-4xl font-bold tracking-tight sm:text-5xl">
                    "About Me"
                </h1>
                <div class="mt-8 space-y-4 text-base leading-relaxed text-muted-foreground md:text-lg">
                    <p>
                        "Generalist engineer with 10+ years of experience across SaaS startups, distributed systems, and game infrastructure. I've built and operated backends serving 300k+ daily active users, with a focus on reliability, scalability, and thoughtful design."
                    </p>
                    <p>
                        "I enjoy learning and applying new technologies, while keeping a strong respect for mature, battle-tested tools. My goal is simple: build systems that are practical, resilient, and pleasant to use."
                    </p>
                </div>
            </section>

            // Work History
            <section class="pb-16 md:pb-20">
                <h2 class="font-display text-2xl font-semibold tracking-tight">"Work History"</h2>
                <div class="mt-10 space-y-0">
                    {WORK_HISTORY.iter().map(work_entry).collect_view()}
                </div>
            </section>

            // Education
            <section class="pb-24">
                <h2 class="font-display text-2xl font-semibold tracking-tight">"Education"</h2>
                <div class="mt-10">
                    <div class="relative border-l-2 border-border pl-8">
                        // Timeline dot
                        <div class="absolute -left-[7px] top-1 h-3 w-3 rounded-full border-2 border-foreground bg-background"></div>
                        <div class="flex flex-col gap-1 sm:flex-row sm:items-baseline sm:justify-between">
                            <div>
                                <h3 class="font-display text-lg font-semibold">
                                    "Bachelor of Applied Science in Mechatronics Engineering"
                                </h3>
                                <p class="text-sm text-muted-foreground">
                                    "University of Waterloo, Co-operative Program · With Distinction"
                                </p>
                            </div>
                            <span class="shrink-0 text-sm tabular-nums text-muted-foreground">
                                "Sep 2012 – May 2018"
                            </span>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}

fn work_entry(entry: &'static WorkEntry) -> impl IntoView {
    view! {
        <div class="relative border-l-2 border-border pb-10 pl-8 last:pb-0">
            // Timeline dot
            <div class="absolute -left-[7px] top-1 h-3 w-3 rounded-full border-2 border-foreground bg-background"></div>

            <div class="grid gap-1 sm:grid-cols-[1fr_auto]">
                <h3 class="font-display text-lg font-semibold">{entry.company}</h3>
                <span class="shrink-0 text-sm tabular-nums text-muted-foreground sm:self-center">
                    {if entry.end_date.is_empty() {
                        Either::Left(entry.start_date)
                    } else {
                        Either::Right(format!("{} – {}", entry.start_date, entry.end_date))
                    }}
                </span>
                <p class="text-sm text-muted-foreground sm:col-span-2">
                    {format!("{} · {}", entry.title, entry.location)}
                </p>
            </div>

            <Show when=move || !entry.tags.is_empty()>
                <div class="mt-3 flex flex-wrap gap-1.5">
                    {entry
                        .tags
                        .iter()
                        .map(|tag| view! { <Badge label=*tag /> })
                        .collect_view()}
                </div>
            </Show>

            <ul class="mt-3 space-y-1.5">
                {entry
                    .description
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="flex gap-2 text-sm leading-relaxed text-muted-foreground">
                                <span class="mt-2 h-1 w-1 shrink-0 rounded-full bg-muted-foreground/50"></span>
                                {*item}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
