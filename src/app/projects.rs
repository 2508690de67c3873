use leptos::either::EitherOf3;
use leptos::prelude::*;

use super::content::{Project, PROJECTS};
use super::paging::{DetailTab, Disclosure};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section class="py-24 px-6 relative">
            <div class="max-w-6xl mx-auto relative z-10">
                <h2 class="text-5xl font-bold text-blue-900 mb-4 flex items-center gap-3">
                    <span class="inline-block relative">
                        <span
                            class="inline-block animate-speech-bubble text-4xl absolute"
                            style="bottom: -5px; left: 0px"
                        >
                            "💭"
                        </span>
                        <span
                            class="inline-block animate-speech-bubble text-6xl"
                            style="animation-delay: 0.5s"
                        >
                            "💭"
                        </span>
                    </span>
                    <span>"Projects That Show How I Think & Execute"</span>
                </h2>
                <p class="text-xl text-gray-600 mb-16">"From client work to technical builds."</p>

                <div class="space-y-8">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Expandable project card. The expanded area carries its own tab strip;
/// which tab is active is independent of whether the card is open, and both
/// reset only when the card is remounted.
#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let (panel, set_panel) = signal(Disclosure::default());
    let (active_tab, set_active_tab) = signal(DetailTab::default());

    let expanded = move || panel.get().is_expanded();

    view! {
        <div
            class="bg-white rounded-lg shadow-md border border-blue-100 overflow-hidden transition-all duration-500"
            class:shadow-xl=expanded
        >
            <div class="p-6">
                <div class="flex items-start justify-between gap-4 mb-3">
                    <div class="flex-1">
                        <h3 class="text-2xl font-bold text-gray-900 mb-2">{project.title}</h3>
                        <p class="text-gray-700 mb-1">{project.description}</p>
                        <p class="text-sm text-gray-500">{project.location}</p>
                    </div>
                    <button
                        on:click=move |_| set_panel.update(|p| p.toggle())
                        class="flex-shrink-0 mt-2 p-2 hover:bg-blue-50 rounded-full transition-colors"
                    >
                        <span
                            class="inline-block text-blue-900 text-2xl transition-transform duration-300"
                            class=("rotate-180", expanded)
                        >
                            "⌄"
                        </span>
                    </button>
                </div>

                <div class="flex items-center gap-3 mb-3">
                    <span class="text-lg font-bold text-blue-900">{project.outcome}</span>
                </div>

                <div class="flex items-center gap-2 flex-wrap mb-3">
                    {project
                        .tools
                        .iter()
                        .map(|tool| {
                            view! {
                                <span class="px-3 py-1 bg-blue-100 text-blue-900 text-xs font-semibold rounded-full">
                                    {*tool}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                {move || {
                    (!expanded())
                        .then(|| {
                            view! {
                                <button
                                    on:click=move |_| set_panel.update(|p| p.open())
                                    class="flex items-center text-blue-900 font-semibold text-sm hover:translate-x-1 transition-transform cursor-pointer"
                                >
                                    "View details ›"
                                </button>
                            }
                        })
                }}
            </div>

            {move || {
                expanded()
                    .then(|| {
                        view! {
                            <div class="border-t border-blue-100 animate-unfold">
                                <div class="flex border-b border-blue-100 bg-blue-50">
                                    {DetailTab::ALL
                                        .into_iter()
                                        .map(|tab| {
                                            view! {
                                                <button
                                                    on:click=move |_| set_active_tab.set(tab)
                                                    class="flex-1 px-6 py-3 font-semibold transition-colors"
                                                    class=(
                                                        ["bg-white", "text-blue-900", "border-b-2", "border-blue-900"],
                                                        move || active_tab.get() == tab,
                                                    )
                                                    class=(
                                                        ["text-gray-600", "hover:text-blue-900"],
                                                        move || active_tab.get() != tab,
                                                    )
                                                >
                                                    {tab.label()}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>

                                <div class="p-6">
                                    {move || match active_tab.get() {
                                        DetailTab::What => {
                                            EitherOf3::A(
                                                view! {
                                                    <div class="text-gray-700 text-lg leading-relaxed">
                                                        {project.what_it_is}
                                                    </div>
                                                },
                                            )
                                        }
                                        DetailTab::Problem => {
                                            EitherOf3::B(view! { <BulletList items=project.problem /> })
                                        }
                                        DetailTab::System => {
                                            EitherOf3::C(view! { <BulletList items=project.system /> })
                                        }
                                    }}
                                </div>

                                <div class="px-6 pb-6">
                                    <div class="bg-green-50 p-4 rounded border-l-4 border-green-600">
                                        <h4 class="font-bold text-green-900 mb-3">"Impact"</h4>
                                        <div class="space-y-2 text-gray-700">
                                            {project
                                                .impact
                                                .iter()
                                                .map(|item| view! { <p>{*item}</p> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>

                                <div class="px-6 pb-6">
                                    <button
                                        on:click=move |_| set_panel.update(|p| p.close())
                                        class="w-full px-6 py-3 border-2 border-blue-900 text-blue-900 font-semibold rounded hover:bg-blue-900 hover:text-white transition-all"
                                    >
                                        "Close"
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn BulletList(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="text-gray-700 space-y-2">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <li class="flex items-start">
                            <span class="text-blue-900 mr-2">"•"</span>
                            <span>{*item}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
