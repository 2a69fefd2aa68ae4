use leptos::prelude::*;

use super::{primitives::ExtLink, theme::ThemeToggle};
use crate::content::{PROFILE, SECTIONS};

const HEADER_LINK: &str = "rounded-xl border px-3 py-1.5 text-sm hover:-translate-y-0.5 transition";

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 backdrop-blur supports-[backdrop-filter]:bg-white/60 dark:supports-[backdrop-filter]:bg-neutral-950/60 border-b border-black/5 dark:border-white/10">
            <div class="max-w-6xl mx-auto px-4 py-3 flex items-center justify-between">
                <a href="#home" class="font-semibold tracking-tight text-lg">
                    {PROFILE.name}
                </a>

                <nav class="hidden md:flex items-center gap-6">
                    {SECTIONS
                        .iter()
                        .map(|s| {
                            view! {
                                <a href=format!("#{}", s.id) class="text-sm opacity-80 hover:opacity-100">
                                    {s.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="flex items-center">
                    <div class="flex items-center gap-2">
                        <ExtLink href=PROFILE.resume() attr:class=HEADER_LINK>
                            "Resume"
                        </ExtLink>
                        <ExtLink href=PROFILE.linkedin attr:class=HEADER_LINK>
                            "LinkedIn"
                        </ExtLink>
                        <ExtLink href=PROFILE.github attr:class=HEADER_LINK>
                            "GitHub"
                        </ExtLink>
                    </div>
                    <span class="mx-3 md:mx-5 h-5 w-px bg-black/10 dark:bg-white/15" />
                    <ThemeToggle />
                </div>
            </div>
        </header>
    }
}
