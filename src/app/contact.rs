use leptos::prelude::*;

use super::primitives::{ExtLink, Section};
use crate::{config::BUILD_YEAR, content::PROFILE};

const CONTACT_LINK: &str = "px-4 py-2 rounded-2xl border";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <Section id="contact" title="Contact">
            <div class="p-6 rounded-2xl border">
                <p class="opacity-90">
                    "Open to full-time SWE roles starting Summer/Fall 2026. The fastest way to reach me is "
                    <a
                        class="underline"
                        href=PROFILE.mailto()
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {PROFILE.email}
                    </a>
                    "."
                </p>
                <div class="mt-4 flex flex-wrap gap-3">
                    <ExtLink href=PROFILE.linkedin attr:class=CONTACT_LINK>
                        "LinkedIn"
                    </ExtLink>
                    <ExtLink href=PROFILE.github attr:class=CONTACT_LINK>
                        "GitHub"
                    </ExtLink>
                    <ExtLink href=PROFILE.resume() attr:class=CONTACT_LINK>
                        "Resume"
                    </ExtLink>
                </div>
            </div>
        </Section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="max-w-6xl mx-auto px-4 py-10 opacity-70 text-sm">
            "© " {BUILD_YEAR} " " {PROFILE.name} " · Built with Rust, Leptos & Tailwind."
        </footer>
    }
}
