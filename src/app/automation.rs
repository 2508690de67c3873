use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_interval_fn_with_options,
    utils::Pausable, UseIntersectionObserverOptions, UseIntervalFnOptions,
};

use super::content::{
    AutomationProject, CounterSpec, AUTOMATIONS, DAYS_SAVED, HOURS_SAVED, VISIBLE_THRESHOLD,
};
use super::paging::Disclosure;

/// Automation project cards plus the two counters that tick up the first
/// time the section scrolls into view. The counters are paused intervals;
/// the intersection observer resumes them once, and each pauses itself
/// again when it reaches its target. Observer and intervals are torn down
/// with this component's scope.
#[component]
pub fn AutomationSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let (has_animated, set_has_animated) = signal(false);

    let (hours_counter, resume_hours) = ticking_counter(HOURS_SAVED);
    let (days_counter, resume_days) = ticking_counter(DAYS_SAVED);

    use_intersection_observer_with_options(
        section_ref,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting())
                && !has_animated.get_untracked()
            {
                set_has_animated.set(true);
                resume_hours();
                resume_days();
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![VISIBLE_THRESHOLD]),
    );

    view! {
        <section
            node_ref=section_ref
            id="automation-section"
            class="py-24 px-6 bg-white/50 backdrop-blur-sm relative"
        >
            <div class="max-w-6xl mx-auto relative z-10">
                <div class="mb-16">
                    <h2 class="text-5xl font-bold text-blue-900 mb-3 flex items-center gap-3">
                        <span class="inline-block animate-spin-slow text-6xl">"⚙️"</span>
                        <span>"I Automate So Marketers Can Breathe"</span>
                    </h2>
                    <p class="text-xl text-gray-600">"Systems that scale work, not stress."</p>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    {AUTOMATIONS
                        .iter()
                        .map(|project| view! { <AutomationCard project /> })
                        .collect_view()}
                </div>

                <div class="mt-12 text-center">
                    <p class="text-gray-600 italic text-lg mb-6">
                        "Built to scale personalization — not stress."
                    </p>
                    <div class="flex items-center justify-center gap-12">
                        <MetricCounter spec=HOURS_SAVED value=hours_counter />
                        <MetricCounter spec=DAYS_SAVED value=days_counter />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// A counter that advances by one per `spec.step_ms` until it reaches
/// `spec.target`. Starts paused; the returned closure starts it.
fn ticking_counter(spec: CounterSpec) -> (ReadSignal<u32>, impl Fn() + Clone) {
    let (value, set_value) = signal(0u32);

    let Pausable { pause, resume, .. } = use_interval_fn_with_options(
        move || set_value.update(|v| *v += 1),
        spec.step_ms,
        UseIntervalFnOptions::default().immediate(false),
    );

    Effect::new(move |_| {
        if value.get() >= spec.target {
            pause();
        }
    });

    (value, resume)
}

#[component]
fn MetricCounter(spec: CounterSpec, value: ReadSignal<u32>) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-5xl font-black text-blue-900 mb-2">
                {spec.prefix}
                {move || value.get()}
            </div>
            <div class="text-sm text-gray-600 font-semibold">{spec.caption}</div>
        </div>
    }
}

#[component]
fn AutomationCard(project: &'static AutomationProject) -> impl IntoView {
    let (panel, set_panel) = signal(Disclosure::default());

    view! {
        <div class="bg-white border-2 border-gray-200 rounded-lg p-6 hover:border-blue-900 hover:shadow-xl transition-all">
            <h3 class="text-xl font-bold mb-3 text-gray-900">{project.title}</h3>

            <p class="text-gray-700 text-sm mb-4 leading-relaxed">{project.summary}</p>

            <button
                on:click=move |_| set_panel.update(|p| p.toggle())
                class="text-blue-900 font-semibold text-sm hover:underline mb-4 flex items-center gap-1"
            >
                {move || if panel.get().is_expanded() { "Show less ⌃" } else { "Read more ⌄" }}
            </button>

            {move || {
                panel
                    .get()
                    .is_expanded()
                    .then(|| {
                        view! {
                            <div class="space-y-4 animate-unfold">
                                <div>
                                    <div class="font-semibold text-gray-900 mb-2 text-sm">
                                        "The problem"
                                    </div>
                                    <ul class="text-gray-700 text-sm space-y-1">
                                        {project
                                            .problem
                                            .iter()
                                            .map(|item| view! { <li>"• " {*item}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>

                                <div class="flex items-center gap-2 flex-wrap text-xs">
                                    <span class="font-semibold text-gray-600">"Tools:"</span>
                                    {project
                                        .tools
                                        .iter()
                                        .enumerate()
                                        .map(|(i, tool)| {
                                            view! {
                                                <span class="px-3 py-1 bg-blue-100 text-blue-900 font-semibold rounded-full">
                                                    {*tool}
                                                </span>
                                                {(i + 1 < project.tools.len())
                                                    .then(|| {
                                                        view! { <span class="text-gray-400">"→"</span> }
                                                    })}
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
            }}

            <div class="bg-blue-50 p-3 rounded text-sm font-bold text-blue-900 mt-4">
                {project
                    .impact
                    .iter()
                    .map(|item| view! { <div>{*item}</div> })
                    .collect_view()}
            </div>
        </div>
    }
}
