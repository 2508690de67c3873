use leptos::prelude::*;

use super::content::{CONTACT_PROMPTS, EMAIL, LINKEDIN_LABEL, LINKEDIN_URL};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-24 px-6 bg-blue-900 text-white relative">
            <div class="max-w-3xl mx-auto text-center relative z-10">
                <h2 class="text-5xl font-bold mb-8">"Let's build something that works."</h2>
                <div class="flex flex-col gap-4 max-w-md mx-auto mb-12">
                    {CONTACT_PROMPTS
                        .iter()
                        .map(|prompt| {
                            view! {
                                <a
                                    href=format!("mailto:{EMAIL}")
                                    class="px-6 py-4 bg-white text-blue-900 font-semibold hover:scale-105 transition-transform text-left rounded-lg"
                                >
                                    {*prompt}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-6 justify-center">
                    <a
                        href=format!("mailto:{EMAIL}")
                        class="text-lg hover:text-cyan-300 transition-colors"
                    >
                        {EMAIL}
                    </a>
                    <span class="text-gray-400">"•"</span>
                    <a
                        href=LINKEDIN_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-lg hover:text-cyan-300 transition-colors"
                    >
                        {LINKEDIN_LABEL}
                    </a>
                </div>
                <p class="mt-16 text-sm text-blue-200/70">
                    "v" {env!("CARGO_PKG_VERSION")} " · built " {env!("BUILD_TIME")}
                </p>
            </div>
        </section>
    }
}
