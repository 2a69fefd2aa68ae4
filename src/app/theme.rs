use std::sync::{Arc, Mutex};

use leptos::{either::Either, prelude::*};
use leptos_use::use_preferred_dark;

use crate::theme::{apply_to_document, LocalStorageStore, ThemeController};

type SharedController = Arc<Mutex<ThemeController<LocalStorageStore>>>;

/// Handle to the page theme, shared through context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub is_dark: ReadSignal<bool>,
    controller: StoredValue<SharedController>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.controller.with_value(|c| {
            let pref = c
                .lock()
                .expect("should be able to lock theme controller")
                .toggle();
            log::info!("theme preference set to {pref}");
        });
    }
}

/// Set up the theme controller and put a [`ThemeContext`] in context.
///
/// The signal starts light so server and client render the same markup;
/// the immediate watch below brings it in line once hydrated.
pub fn provide_theme() -> ThemeContext {
    let system_dark = use_preferred_dark();
    let (is_dark, set_is_dark) = signal(false);

    let controller = StoredValue::new(Arc::new(Mutex::new(ThemeController::new(
        LocalStorageStore,
        system_dark.get_untracked(),
    ))));

    let listener = controller.with_value(|c| {
        c.lock()
            .expect("should be able to lock theme controller")
            .subscribe(move |dark| {
                apply_to_document(dark);
                set_is_dark.set(dark);
            })
    });
    let shared = controller.get_value();
    on_cleanup(move || {
        if let Ok(mut c) = shared.lock() {
            c.unsubscribe(listener);
        }
    });

    Effect::watch(
        move || system_dark.get(),
        move |dark, _, _| {
            controller.with_value(|c| {
                c.lock()
                    .expect("should be able to lock theme controller")
                    .set_system_dark(*dark);
            });
        },
        true,
    );

    let ctx = ThemeContext {
        is_dark,
        controller,
    };
    provide_context(ctx);
    ctx
}

fn offered_label(is_dark: bool) -> &'static str {
    if is_dark {
        "Light"
    } else {
        "Dark"
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let is_dark = theme.is_dark;

    view! {
        <button
            aria-label=move || format!("Switch to {} mode", offered_label(is_dark.get()))
            on:click=move |_| theme.toggle()
            class=move || {
                let tone = if is_dark.get() {
                    "bg-amber-300 text-gray-900 ring-amber-300/40"
                } else {
                    "bg-gray-900 text-white ring-white/10"
                };
                format!(
                    "group inline-flex items-center gap-2 rounded-full px-3 py-1.5 text-sm font-semibold shadow ring-1 transition hover:shadow-md hover:-translate-y-0.5 {tone}"
                )
            }
        >
            {move || {
                if is_dark.get() {
                    // sun, offering light
                    Either::Left(
                        view! {
                            <svg aria-hidden="true" viewBox="0 0 24 24" class="h-4 w-4">
                                <path
                                    fill="currentColor"
                                    d="M12 4.5a1 1 0 0 1 1 1V7a1 1 0 1 1-2 0V5.5a1 1 0 0 1 1-1Zm0 11a3.5 3.5 0 1 1 0-7 3.5 3.5 0 0 1 0 7ZM4.22 6.34a1 1 0 0 1 1.41 0l1.06 1.06a1 1 0 0 1-1.41 1.41L4.22 7.75a1 1 0 0 1 0-1.41ZM4.5 13a1 1 0 1 1 0-2H6a1 1 0 1 1 0 2H4.5Zm11.31-5.6 1.06-1.06a1 1 0 1 1 1.41 1.41l-1.06 1.06a1 1 0 0 1-1.41-1.41ZM18 13a1 1 0 1 1 0-2h1.5a1 1 0 1 1 0 2H18Zm-6 6.5a1 1 0 0 1-1-1V17a1 1 0 1 1 2 0v1.5a1 1 0 0 1-1 1Zm6.78-1.84a1 1 0 0 1-1.41 0L16.31 16.6a1 1 0 0 1 1.41-1.41l1.06 1.06a1 1 0 0 1 0 1.41Zm-11.56 0a1 1 0 0 1 0-1.41l1.06-1.06a1 1 0 1 1 1.41 1.41L7.63 17.66a1 1 0 0 1-1.41 0Z"
                                />
                            </svg>
                        },
                    )
                } else {
                    // moon, offering dark
                    Either::Right(
                        view! {
                            <svg aria-hidden="true" viewBox="0 0 24 24" class="h-4 w-4">
                                <path
                                    fill="currentColor"
                                    d="M21 12.79A9 9 0 1 1 11.21 3a7 7 0 1 0 9.79 9.79Z"
                                />
                            </svg>
                        },
                    )
                }
            }}
            <span>{move || offered_label(is_dark.get())}</span>
        </button>
    }
}
