use leptos::prelude::*;

use super::primitives::{Card, ExtLink, Section, Tag};
use crate::content::{Project, PROJECTS};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <Section
            id="projects"
            title="Projects"
            subtitle="Impact-driven builds spanning full-stack systems, LLM evaluation, and applied ML."
        >
            <div class="grid md:grid-cols-2 gap-5 md:gap-6">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(i, project)| {
                        view! {
                            <div class="fade-up" style=format!("animation-delay: {}ms", i * 50)>
                                <ProjectCard project />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <Card>
            <div class="flex items-start justify-between gap-3">
                <h3 class="text-lg md:text-xl font-semibold">{project.title}</h3>
                <span class="text-xs opacity-60 whitespace-nowrap">{project.period}</span>
            </div>
            <p class="mt-2 text-sm opacity-90">{project.summary}</p>
            {(!project.highlights.is_empty())
                .then(|| {
                    view! {
                        <ul class="mt-3 list-disc pl-5 text-sm space-y-1">
                            {project
                                .highlights
                                .iter()
                                .map(|h| view! { <li>{*h}</li> })
                                .collect_view()}
                        </ul>
                    }
                })}
            {(!project.tags.is_empty())
                .then(|| {
                    view! {
                        <div class="mt-4 flex flex-wrap gap-2">
                            {project.tags.iter().map(|t| view! { <Tag>{*t}</Tag> }).collect_view()}
                        </div>
                    }
                })}
            {project
                .cta
                .as_ref()
                .map(|cta| {
                    view! {
                        <div class="mt-4">
                            <ExtLink
                                href=cta.href
                                attr:class="rounded-full border px-4 py-2 text-sm font-semibold hover:shadow-md hover:-translate-y-0.5 inline-flex items-center gap-2 transition"
                            >
                                {cta.label}
                            </ExtLink>
                        </div>
                    }
                })}
        </Card>
    }
}
