use leptos::either::EitherOf4;
use leptos::prelude::*;

use super::content::{Story, STORIES};
use super::paging::SequenceCursor;

/// The four pages of a story card, in reading order. Kept as a closed set
/// rather than data because each page has a structurally distinct layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoryPage {
    Problem,
    System,
    How,
    Why,
}

const STORY_PAGES: [StoryPage; 4] = [
    StoryPage::Problem,
    StoryPage::System,
    StoryPage::How,
    StoryPage::Why,
];

#[component]
pub fn StoriesSection() -> impl IntoView {
    view! {
        <section class="py-24 px-6 relative">
            <div class="max-w-6xl mx-auto relative z-10">
                <h2 class="text-5xl font-bold text-blue-900 mb-4 flex items-center gap-3">
                    <span class="text-5xl animate-lightbulb">"💡"</span>
                    <span>"What I'd Build Next"</span>
                </h2>
                <p class="text-xl text-gray-600 mb-16">"Systems I would build for marketing."</p>

                <div class="space-y-8">
                    {STORIES
                        .iter()
                        .map(|story| view! { <StoryCard story /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// A story card paged like a small book: clamped cursor, disabled controls
/// at either cover, one indicator segment per page.
#[component]
fn StoryCard(story: &'static Story) -> impl IntoView {
    let (page, set_page) = signal(SequenceCursor::clamped(STORY_PAGES.len()));

    view! {
        <div class="bg-white rounded-lg shadow-lg border-2 border-blue-200 overflow-hidden">
            <div class="bg-gradient-to-r from-blue-900 to-blue-700 text-white p-6">
                <h3 class="text-2xl font-bold mb-2">{story.title}</h3>
                <p class="text-blue-100 text-sm">{story.subtitle}</p>
            </div>

            <div class="relative bg-white min-h-96">
                <div class="p-8 pb-20">
                    <div class="flex justify-center gap-2 mb-6">
                        {STORY_PAGES
                            .iter()
                            .enumerate()
                            .map(|(idx, _)| {
                                view! {
                                    <div
                                        class="h-2 flex-1 rounded"
                                        class=("bg-blue-900", move || page.get().index() == idx)
                                        class=("bg-gray-300", move || page.get().index() != idx)
                                    ></div>
                                }
                            })
                            .collect_view()}
                    </div>

                    {move || match STORY_PAGES[page.get().index()] {
                        StoryPage::Problem => {
                            EitherOf4::A(
                                view! {
                                    <div class="animate-page-turn">
                                        <PageHeading text="The Problem" />
                                        <p class="text-gray-800 text-2xl leading-relaxed italic border-l-4 border-blue-900 pl-4">
                                            "\"" {story.problem} "\""
                                        </p>
                                    </div>
                                },
                            )
                        }
                        StoryPage::System => {
                            EitherOf4::B(
                                view! {
                                    <div class="animate-page-turn">
                                        <PageHeading text="The System" />
                                        <p class="text-gray-800 text-xl leading-relaxed border-l-4 border-blue-900 pl-4">
                                            {story.system}
                                        </p>
                                    </div>
                                },
                            )
                        }
                        StoryPage::How => {
                            EitherOf4::C(
                                view! {
                                    <div class="animate-page-turn">
                                        <PageHeading text="How It Works" />
                                        <div class="space-y-4">
                                            {story
                                                .how_it_works
                                                .iter()
                                                .enumerate()
                                                .map(|(idx, step)| {
                                                    view! {
                                                        <div class="flex items-start gap-3">
                                                            <div class="flex-shrink-0 w-8 h-8 bg-blue-900 text-white rounded-full flex items-center justify-center font-bold">
                                                                {idx + 1}
                                                            </div>
                                                            <p class="text-gray-800 text-lg pt-1">{*step}</p>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                },
                            )
                        }
                        StoryPage::Why => {
                            EitherOf4::D(
                                view! {
                                    <div class="animate-page-turn">
                                        <PageHeading text="Why It Matters" />
                                        <p class="text-gray-800 text-xl leading-relaxed mb-6 border-l-4 border-blue-900 pl-4">
                                            {story.why_it_matters}
                                        </p>
                                        <div class="mt-6 pt-6 border-t border-blue-200">
                                            <p class="text-sm font-semibold text-gray-700 mb-3">
                                                "Built with:"
                                            </p>
                                            <div class="flex flex-wrap gap-2">
                                                {story
                                                    .tools
                                                    .iter()
                                                    .map(|tool| {
                                                        view! {
                                                            <span class="px-3 py-1 bg-blue-900 text-white text-xs font-semibold rounded-full">
                                                                {*tool}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </div>
                                },
                            )
                        }
                    }}
                </div>

                <div class="absolute bottom-6 left-0 right-0 flex justify-between px-8">
                    <button
                        on:click=move |_| set_page.update(|c| c.previous())
                        disabled=move || page.get().at_start()
                        class="px-4 py-1 text-sm bg-blue-900 text-white font-semibold rounded disabled:opacity-30 disabled:cursor-not-allowed hover:bg-blue-800 transition-colors flex items-center gap-1"
                    >
                        "← Previous"
                    </button>
                    <button
                        on:click=move |_| set_page.update(|c| c.next())
                        disabled=move || page.get().at_end()
                        class="px-4 py-1 text-sm bg-blue-900 text-white font-semibold rounded disabled:opacity-30 disabled:cursor-not-allowed hover:bg-blue-800 transition-colors flex items-center gap-1"
                    >
                        "Next →"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PageHeading(text: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-start gap-3 mb-4">
            <h4 class="text-2xl font-bold text-blue-900">{text}</h4>
        </div>
    }
}
