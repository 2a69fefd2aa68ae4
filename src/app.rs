mod about;
mod achievements;
mod contact;
mod header;
mod homepage;
mod primitives;
mod projects;
mod resume;
mod theme;

pub use about::About;
pub use achievements::AchievementsSection;
pub use contact::{Contact, Footer};
pub use homepage::{HomePage, MainSections};
pub use primitives::{Card, ExtLink, PlayBadge, Section, Tag};
pub use projects::ProjectsSection;
pub use resume::{EducationSection, ExperienceSection, SkillsSection};
pub use theme::{provide_theme, ThemeContext, ThemeToggle};

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PROFILE;
use header::SiteHeader;

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
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();

    view! {
        <Title text=PROFILE.name />
        <Meta name="description" content=PROFILE.tagline />

        <Router>
            <div class="min-h-screen bg-white text-gray-900 dark:bg-neutral-950 dark:text-neutral-100 transition-colors">
                <SiteHeader />
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
                <Footer />
            </div>
        </Router>
    }
}
