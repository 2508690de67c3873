use leptos::prelude::*;

use super::content::{Role, ROLES};

/// Work-experience timeline. Each entry expands in place; opening one
/// closes whichever was open before it.
#[component]
pub fn ExperienceSection() -> impl IntoView {
    let (expanded_role, set_expanded_role) = signal(None::<usize>);

    view! {
        <section id="journey" class="py-24 px-6 bg-white/50 backdrop-blur-sm relative">
            <div class="max-w-5xl mx-auto relative z-10">
                <h2 class="text-5xl font-bold text-blue-900 mb-4 relative">
                    <span class="inline-block animate-plane text-4xl absolute left-0 -top-12">
                        "🛫" <span class="smoke-trail"></span>
                    </span>
                    <span class="inline-block">"Not a resume. A journey."</span>
                </h2>
                <p class="text-xl text-gray-600 mb-16">"Each role was a new experience."</p>

                <div class="relative border-l-4 border-blue-900 pl-12 space-y-12">
                    {ROLES
                        .iter()
                        .enumerate()
                        .map(|(idx, role)| {
                            view! {
                                <TimelineEntry
                                    role
                                    expanded=Signal::derive(move || {
                                        expanded_role.get() == Some(idx)
                                    })
                                    on_toggle=move |_| {
                                        set_expanded_role
                                            .update(|cur| {
                                                *cur = if *cur == Some(idx) { None } else { Some(idx) };
                                            })
                                    }
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(
    role: &'static Role,
    expanded: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="relative">
            <div class="absolute -left-14 w-6 h-6 bg-blue-900 rounded-full border-4 border-white"></div>
            <div
                class="bg-white p-6 rounded-lg shadow-md cursor-pointer hover:shadow-xl transition-shadow border border-blue-100"
                on:click=move |_| on_toggle.run(())
            >
                <div class="flex items-start justify-between">
                    <div>
                        <div class="text-sm font-bold text-blue-900 mb-1">{role.year}</div>
                        <h3 class="text-2xl font-bold mb-1">{role.title}</h3>
                        <p class="text-gray-600">{role.company}</p>
                        {move || {
                            (!expanded.get())
                                .then(|| {
                                    view! {
                                        <div class="mt-3 flex gap-2 flex-wrap">
                                            {role
                                                .impact
                                                .iter()
                                                .map(|metric| {
                                                    view! {
                                                        <span class="text-sm font-bold text-blue-900">
                                                            {*metric}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    }
                                })
                        }}
                    </div>
                    <span
                        class="inline-block text-blue-900 text-2xl transition-transform"
                        class=("rotate-180", move || expanded.get())
                    >
                        "⌄"
                    </span>
                </div>

                {move || {
                    expanded
                        .get()
                        .then(|| {
                            view! {
                                <div class="mt-6 space-y-4 text-gray-700 animate-unfold">
                                    <div>
                                        <strong>"Context: "</strong>
                                        {role.context}
                                    </div>
                                    <div>
                                        <strong>"Problem: "</strong>
                                        {role.problem}
                                    </div>
                                    <div>
                                        <strong>"Ownership: "</strong>
                                        {role.ownership}
                                    </div>
                                    <div class="flex gap-2 flex-wrap">
                                        <strong>"Tools:"</strong>
                                        {role
                                            .tools
                                            .iter()
                                            .map(|tool| {
                                                view! {
                                                    <span class="px-3 py-1 bg-blue-100 text-blue-900 text-sm font-semibold rounded-full">
                                                        {*tool}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <div>
                                        <strong>"Impact:"</strong>
                                        <ul class="mt-2 space-y-1">
                                            {role
                                                .impact
                                                .iter()
                                                .map(|metric| {
                                                    view! {
                                                        <li class="text-blue-900 font-bold">"• " {*metric}</li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}
