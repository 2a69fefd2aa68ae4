use leptos::prelude::*;

use super::{
    about::About,
    achievements::AchievementsSection,
    contact::Contact,
    primitives::ExtLink,
    projects::ProjectsSection,
    resume::{EducationSection, ExperienceSection, SkillsSection},
};
use crate::content::PROFILE;

const HERO_LINK: &str = "rounded-2xl border px-4 py-2 font-medium";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <main class="max-w-6xl mx-auto px-4">
            <MainSections />
        </main>
    }
}

/// Every page section, in navigation order.
#[component]
pub fn MainSections() -> impl IntoView {
    view! {
        <About />
        <EducationSection />
        <SkillsSection />
        <ProjectsSection />
        <ExperienceSection />
        <AchievementsSection />
        <Contact />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="max-w-6xl mx-auto px-4 pt-10 md:pt-16 pb-6">
            <div class="grid md:grid-cols-[1.2fr,0.8fr] gap-8 items-center">
                <div class="fade-up">
                    <h1 class="text-3xl md:text-5xl font-extrabold tracking-tight">
                        {PROFILE.name}
                    </h1>
                    <p class="mt-4 text-lg md:text-xl opacity-90">{PROFILE.tagline}</p>
                    <div class="mt-4 text-sm opacity-80">
                        {PROFILE.location} " · "
                        <a
                            class="underline"
                            href=PROFILE.mailto()
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {PROFILE.email}
                        </a>
                    </div>
                    <div class="mt-6 flex flex-wrap gap-3">
                        <ExtLink href=PROFILE.resume() attr:class=HERO_LINK>
                            "Resume"
                        </ExtLink>
                        <ExtLink href=PROFILE.linkedin attr:class=HERO_LINK>
                            "LinkedIn"
                        </ExtLink>
                        <ExtLink href=PROFILE.github attr:class=HERO_LINK>
                            "GitHub"
                        </ExtLink>
                    </div>
                </div>
                <div class="fade-up flex justify-center md:justify-end" style="animation-delay: 100ms">
                    <figure class="w-44 h-60 md:w-56 md:h-72 lg:w-64 lg:h-80 overflow-hidden rounded-3xl shadow-lg ring-1 ring-black/10 dark:ring-white/10">
                        <img
                            src=PROFILE.photo()
                            alt="Headshot"
                            class="w-full h-full object-cover object-center"
                        />
                    </figure>
                </div>
            </div>
        </section>
    }
}
