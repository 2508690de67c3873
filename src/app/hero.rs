use leptos::prelude::*;
use leptos_use::use_interval_fn;

use super::content::{HEADLINES, HEADLINE_INTERVAL_MS, NAME, PROFILE_PHOTO};
use super::paging::SequenceCursor;

/// Smooth-scroll to a named in-page anchor. Smoothness comes from the
/// `scroll-behavior` rule on the document root.
fn scroll_to_anchor(id: &str) {
    if let Some(el) = document().get_element_by_id(id) {
        el.scroll_into_view();
    }
}

/// Hero banner with the auto-rotating headline. The headline is a cyclic
/// viewer with no visible controls; the interval is cancelled with this
/// component's scope.
#[component]
pub fn Hero() -> impl IntoView {
    let (headline, set_headline) = signal(SequenceCursor::cyclic(HEADLINES.len()));

    use_interval_fn(
        move || set_headline.update(|c| c.next()),
        HEADLINE_INTERVAL_MS,
    );

    view! {
        <section class="min-h-screen flex items-center justify-center px-6 relative">
            <div class="max-w-4xl text-center relative z-10">
                <div class="mb-8 pt-24 flex justify-center">
                    <div class="relative w-72 h-72 rounded-2xl overflow-hidden border-4 border-blue-900 shadow-xl profile-3d-card">
                        <img src=PROFILE_PHOTO alt=NAME class="w-full h-full object-cover" />
                    </div>
                </div>

                <div class="mb-12">
                    <div class="h-32 flex items-center justify-center">
                        <h1 class="text-5xl font-bold text-blue-900 transition-opacity duration-700">
                            {move || HEADLINES[headline.get().index()]}
                        </h1>
                    </div>
                </div>

                <div class="max-w-3xl mx-auto text-left space-y-4 text-lg text-gray-700 leading-relaxed mb-12">
                    <p class="text-2xl font-semibold text-blue-900">"Hi, I'm Sonal"</p>
                    <p>
                        "I'm a University of Waterloo grad with a background in Business and Psychology, and I'm fascinated by how people, systems, and strategy come together. I enjoy tackling messy problems, building smarter processes, and finding ways to make work feel clearer and more human."
                    </p>
                    <p>
                        "I love bringing campaigns to life, from shaping the message and understanding the audience to launching, testing, and learning from real customer behavior. I'm at my best when I'm using insights and data to improve engagement, refine messaging, and create experiences that feel thoughtful rather than transactional."
                    </p>
                    <p>
                        "I'm especially interested in the space where traditional marketing meets automation, using systems and technology to remove busywork and support better ideas. Right now, I'm focused on blending psychology, business strategy, and technology to build marketing that genuinely works for people."
                    </p>
                    <p>
                        "I hope you enjoy reading a little about my journey as much as I've enjoyed creating this space for you 😊"
                    </p>
                </div>

                <div class="flex gap-4 justify-center">
                    <button
                        on:click=move |_| scroll_to_anchor("case-studies")
                        class="px-8 py-3 bg-blue-900 text-white font-semibold hover:scale-105 transition-transform rounded-lg"
                    >
                        "See How I Work"
                    </button>
                    <button
                        on:click=move |_| scroll_to_anchor("contact")
                        class="px-8 py-3 border-2 border-blue-900 text-blue-900 font-semibold hover:bg-blue-900 hover:text-white transition-all rounded-lg"
                    >
                        "Let's Talk"
                    </button>
                </div>
            </div>
            <div class="absolute bottom-12 left-1/2 -translate-x-1/2 animate-bounce text-blue-900 text-3xl">
                "⌄"
            </div>
        </section>
    }
}
