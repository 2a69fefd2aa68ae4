use leptos::prelude::*;

#[component]
pub fn Tag(children: Children) -> impl IntoView {
    view! {
        <span class="inline-flex items-center rounded-full border px-3 py-1 text-xs font-medium tracking-wide">
            {children()}
        </span>
    }
}

/// Top level page section, addressable as `#id`.
#[component]
pub fn Section(
    id: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="scroll-mt-24 py-14 md:py-20">
            <h2 class="text-2xl md:text-3xl font-bold leading-tight">{title}</h2>
            {subtitle.map(|s| view! { <p class="mt-1 text-sm opacity-80 max-w-2xl">{s}</p> })}
            <div class="mt-6">{children()}</div>
        </section>
    }
}

#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! {
        <div class="group rounded-2xl border p-5 md:p-6 shadow-sm hover:shadow-md transition-shadow">
            {children()}
        </div>
    }
}

/// Anchor that always opens in a new tab. Style it with `attr:class`.
#[component]
pub fn ExtLink(#[prop(into)] href: String, children: Children) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel="noopener noreferrer">
            {children()}
        </a>
    }
}

#[component]
pub fn PlayBadge() -> impl IntoView {
    view! {
        <span class="absolute inset-0 grid place-items-center">
            <span class="h-12 w-12 rounded-full bg-black/60 text-white grid place-items-center">
                <svg viewBox="0 0 24 24" class="h-6 w-6 fill-current">
                    <path d="M8 5v14l11-7z" />
                </svg>
            </span>
        </span>
    }
}
