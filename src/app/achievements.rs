use leptos::{either::Either, prelude::*};

use super::primitives::{ExtLink, PlayBadge, Section};
use crate::content::{Achievement, ACHIEVEMENTS};

#[component]
pub fn AchievementsSection() -> impl IntoView {
    view! {
        <Section
            id="achievements"
            title="Achievements"
            subtitle="Awards, fellowships, and competitions."
        >
            <div class="space-y-12 md:space-y-16">
                {ACHIEVEMENTS
                    .iter()
                    .enumerate()
                    .map(|(i, achievement)| {
                        view! {
                            <div class="fade-up" style=format!("animation-delay: {}ms", i * 30)>
                                <AchievementRow achievement />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

/// Text on the left, media on the right. Without a thumbnail the text takes
/// the whole row.
#[component]
fn AchievementRow(achievement: &'static Achievement) -> impl IntoView {
    let href = achievement.href();
    let thumbnail = achievement.thumbnail();
    let text_class = if thumbnail.is_some() {
        "md:col-span-7 md:pr-12"
    } else {
        "md:col-span-12"
    };

    let media = thumbnail.map(|src| {
        let image = view! {
            <div class="relative w-full aspect-[16/9] overflow-hidden rounded-xl ring-1 ring-black/10 dark:ring-white/10">
                <img
                    src=src
                    alt=achievement.title
                    class="absolute inset-0 h-full w-full object-cover"
                    loading="lazy"
                />
                {achievement.is_video().then(|| view! { <PlayBadge /> })}
            </div>
        };
        let image = match href {
            Some(href) => Either::Left(view! { <ExtLink href attr:class="block">{image}</ExtLink> }),
            None => Either::Right(image),
        };
        view! { <div class="md:col-span-5 md:order-last">{image}</div> }
    });

    let link = achievement.link_label().zip(href).map(|(label, href)| {
        view! {
            <ExtLink href attr:class="mt-3 inline-block underline text-sm">
                {label}
            </ExtLink>
        }
    });

    view! {
        <div class="grid items-center gap-6 md:gap-8 md:grid-cols-12">
            <div class=text_class>
                <h3 class="text-lg md:text-xl font-semibold leading-tight">{achievement.title}</h3>
                <p class="text-xs opacity-70 mt-0.5">{achievement.when}</p>
                <p class="mt-3 text-sm md:text-base opacity-90">{achievement.desc}</p>
                {link}
            </div>
            {media}
        </div>
    }
}
