use leptos::prelude::*;

use super::primitives::{Card, Section, Tag};
use crate::content::{EDUCATION, EXPERIENCE, SKILLS};

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <Section id="education" title="Education">
            <ol class="relative border-s pl-6">
                {EDUCATION
                    .iter()
                    .map(|ed| {
                        view! {
                            <li class="mb-10">
                                <TimelineDot />
                                <div class="rounded-2xl p-0">
                                    <h3 class="text-lg md:text-xl font-semibold leading-tight">
                                        {ed.school}
                                    </h3>
                                    <p class="text-sm opacity-80 mt-0.5">
                                        {ed.degree} " · GPA " {ed.gpa} " · " {ed.when}
                                    </p>
                                    <div class="mt-3">
                                        <h4 class="text-sm font-medium mb-2">"Relevant Coursework"</h4>
                                        <div class="flex flex-wrap gap-2">
                                            {ed
                                                .coursework
                                                .iter()
                                                .map(|c| view! { <Tag>{*c}</Tag> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </Section>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <Section id="skills" title="Skills">
            <div class="grid md:grid-cols-2 gap-6">
                {SKILLS
                    .iter()
                    .map(|group| {
                        view! {
                            <Card>
                                <h4 class="font-semibold">{group.category}</h4>
                                <div class="mt-3 flex flex-wrap gap-2">
                                    {group
                                        .skills
                                        .iter()
                                        .map(|s| view! { <Tag>{*s}</Tag> })
                                        .collect_view()}
                                </div>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <Section id="experience" title="Experience">
            <ol class="relative border-s pl-6">
                {EXPERIENCE
                    .iter()
                    .map(|e| {
                        view! {
                            <li class="mb-8">
                                <TimelineDot />
                                <h3 class="font-semibold">
                                    {e.title} " · " <span class="opacity-80">{e.company}</span>
                                </h3>
                                <p class="text-sm opacity-70">{e.period} " · " {e.location}</p>
                                <ul class="mt-2 list-disc pl-5 space-y-1 text-sm">
                                    {e.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
                                </ul>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </Section>
    }
}

#[component]
fn TimelineDot() -> impl IntoView {
    view! {
        <span class="absolute -start-1.5 mt-1.5 h-3 w-3 rounded-full border bg-white dark:bg-neutral-950" />
    }
}
