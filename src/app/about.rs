use leptos::prelude::*;

use super::primitives::Section;
use crate::disclosure::Disclosure;

#[component]
pub fn About() -> impl IntoView {
    let (more, set_more) = signal(Disclosure::default());

    view! {
        <Section id="about" title="About">
            <p class="max-w-3xl leading-relaxed">
                "I am a Master’s student studying Computer & Information Science at the "
                <b>"University of Pennsylvania"</b> ", graduating in " <b>"May 2026"</b>
                ", with 2+ years of professional experience as a Software Engineer at "
                <b>"Flipkart"</b> " and recent internship experience at " <b>"Oracle"</b>
                ". I have built " <b>"AI-driven platforms"</b> ", "
                <b>"scalable distributed systems"</b> ", and " <b>"full-stack applications"</b>
                ", and I’m seeking full-time "
                <b>"Software Engineering roles starting Summer/Fall 2026"</b> "."
            </p>

            <button
                on:click=move |_| set_more.update(|d| *d = d.toggled())
                aria-expanded=move || more.get().is_expanded().to_string()
                class="mt-3 text-sm underline opacity-80 hover:opacity-100"
            >
                {move || more.get().label()}
            </button>

            <Show when=move || more.get().is_expanded()>
                <div class="mt-4 max-w-3xl space-y-4 text-sm md:text-base opacity-90">
                    <p>
                        "At " <b>"Oracle (Summer 2025)"</b> ", I designed and deployed an "
                        <b>"AI Agent Testing Platform"</b> " for "
                        <b>"Fusion ERP Payment Agents"</b> ", integrating "
                        <b>"LLM-as-a-Judge"</b> " with " <b>"Flask + MySQL"</b>
                        ". I introduced features like automated test case generation and run comparison using "
                        <b>"LLM"</b> ", optimized performance with "
                        <b>"caching and multithreading"</b> ", and accelerated agent development by "
                        <b>"30%"</b> " while " <b>"tripling test coverage"</b> "."
                    </p>
                    <p>
                        "Previously as a Software Engineer at " <b>"Flipkart"</b>
                        ", I contributed to the " <b>"Platforms team"</b> ", implementing "
                        <b>"Apache Pulsar"</b>
                        " for distributed messaging. My work focused on "
                        <b>"optimizing cluster performance"</b>
                        ", upgrading versions, and improving resource utilization, which resulted in "
                        <b>"reduced support queries"</b> " and " <b>"enhanced system efficiency"</b>
                        "."
                    </p>
                    <p>
                        "I also have " <b>"research internship"</b> " experience from "
                        <b>"Nanyang Technological University"</b> ", where I conducted "
                        <b>"sentiment analysis"</b> " on " <b>"global warming tweets"</b>
                        " to understand public opinion trends. In addition, I’ve developed "
                        <b>"full-stack applications"</b> " using the "
                        <b>"MERN (MongoDB, ExpressJS, ReactJS, NodeJS)"</b> " stack and worked on "
                        <b>"machine learning"</b> " and " <b>"computer vision"</b>
                        " projects, with a " <b>"published paper in Springer"</b> "."
                    </p>
                    <p>
                        "I am passionate about " <b>"AI-driven platforms"</b> ", "
                        <b>"distributed systems"</b> ", and "
                        <b>"full-stack product development"</b> " - and am seeking "
                        <b>"Software Engineer full-time opportunities starting in Summer/Fall 2026"</b>
                        "."
                    </p>
                </div>
            </Show>
        </Section>
    }
}
