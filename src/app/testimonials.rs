use leptos::prelude::*;

use super::content::{Testimonial, TESTIMONIALS};
use super::paging::Disclosure;

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    view! {
        <section class="py-24 px-6 bg-white/50 backdrop-blur-sm relative">
            <div class="max-w-5xl mx-auto relative z-10">
                <h2 class="text-5xl font-bold text-blue-900 mb-16 flex items-center justify-center gap-3">
                    <span class="inline-block animate-wobble text-6xl">"🌱"</span>
                    <span>"What working with me feels like."</span>
                </h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {TESTIMONIALS
                        .iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Quote card showing the short pull-quote until expanded to the full text.
#[component]
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    let (panel, set_panel) = signal(Disclosure::default());

    view! {
        <div class="bg-white p-8 rounded-lg hover:shadow-xl transition-shadow border border-blue-100">
            <p class="text-lg mb-6 leading-relaxed text-gray-700 whitespace-pre-line">
                "\""
                {move || {
                    if panel.get().is_expanded() {
                        testimonial.full_quote
                    } else {
                        testimonial.short_quote
                    }
                }} "\""
            </p>
            <button
                on:click=move |_| set_panel.update(|p| p.toggle())
                class="text-blue-900 font-semibold text-sm hover:underline mb-4"
            >
                {move || {
                    if panel.get().is_expanded() { "Show less ←" } else { "Read more →" }
                }}
            </button>
            <p class="text-sm text-gray-600 font-semibold">"— " {testimonial.author}</p>
            <p class="text-xs text-gray-500">{testimonial.title}</p>
        </div>
    }
}
