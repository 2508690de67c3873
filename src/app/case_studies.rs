use leptos::either::Either;
use leptos::prelude::*;

use super::content::{CaseStudy, CASE_STEPS, CASE_STUDIES};
use super::paging::SequenceCursor;

/// Case-study grid. Picking a study opens a step-by-step walkthrough whose
/// cursor is clamped at both ends; the forward control reads "Close" on the
/// final step and hands control back to the grid. Reopening for a different
/// study resets the walkthrough to its first step.
#[component]
pub fn CaseStudySection() -> impl IntoView {
    let (selected, set_selected) = signal(None::<usize>);
    let (step, set_step) = signal(SequenceCursor::clamped(CASE_STEPS.len()));

    view! {
        <section id="case-studies" class="py-24 px-6 relative">
            <div class="max-w-6xl mx-auto relative z-10">
                <h2 class="text-5xl font-bold text-blue-900 mb-4 flex items-center gap-3">
                    <span class="inline-block relative text-4xl animate-test-tube-tilt mr-2">
                        "🧪" <span class="test-tube-spill"></span>
                        <span class="test-tube-spill" style="animation-delay: 0.6s"></span>
                        <span class="test-tube-spill" style="animation-delay: 1.2s"></span>
                    </span>
                    <span>"Things I've tested (so you don't have to)"</span>
                </h2>
                <p class="text-xl text-gray-600 mb-16">"Real experiments. Real outcomes."</p>

                {move || match selected.get() {
                    None => {
                        Either::Left(
                            view! {
                                <div class="grid md:grid-cols-3 gap-6">
                                    {CASE_STUDIES
                                        .iter()
                                        .enumerate()
                                        .map(|(idx, study)| {
                                            view! {
                                                <div
                                                    class="bg-white border-2 border-gray-200 p-8 rounded-lg cursor-pointer hover:border-blue-900 hover:shadow-xl transition-all group"
                                                    on:click=move |_| {
                                                        set_selected.set(Some(idx));
                                                        set_step.update(|c| c.reset());
                                                    }
                                                >
                                                    <div class="text-4xl font-black text-blue-900 mb-4">
                                                        {study.outcome}
                                                    </div>
                                                    <h3 class="text-xl font-bold mb-2">{study.title}</h3>
                                                    <div class="flex items-center text-blue-900 font-semibold group-hover:translate-x-2 transition-transform">
                                                        "Read the story →"
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            },
                        )
                    }
                    Some(idx) => {
                        Either::Right(
                            view! {
                                <Walkthrough
                                    study=&CASE_STUDIES[idx]
                                    step
                                    on_step=move |back: bool| {
                                        if back {
                                            set_step.update(|c| c.previous());
                                        } else if step.get_untracked().at_end() {
                                            set_selected.set(None);
                                        } else {
                                            set_step.update(|c| c.next());
                                        }
                                    }
                                    on_close=move |_| set_selected.set(None)
                                />
                            },
                        )
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn Walkthrough(
    study: &'static CaseStudy,
    step: ReadSignal<SequenceCursor>,
    #[prop(into)] on_step: Callback<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="bg-white p-8 rounded-lg shadow-xl border border-blue-100">
            <div class="flex justify-between items-center mb-6">
                <h3 class="text-3xl font-bold">{study.title}</h3>
                <button
                    on:click=move |_| on_close.run(())
                    class="p-2 hover:bg-gray-200 rounded text-2xl leading-none"
                >
                    "✕"
                </button>
            </div>

            // progress strip: every step up to and including the cursor is lit
            <div class="flex gap-2 mb-8">
                {CASE_STEPS
                    .iter()
                    .enumerate()
                    .map(|(i, _)| {
                        view! {
                            <div
                                class="h-2 flex-1 rounded"
                                class=("bg-blue-900", move || i <= step.get().index())
                                class=("bg-gray-300", move || i > step.get().index())
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="bg-blue-50 p-8 rounded-lg mb-6">
                {move || {
                    let (label, body, emphasize) = match step.get().index() {
                        0 => ("Goal:", study.goal, false),
                        1 => ("Insight:", study.insight, false),
                        2 => ("Strategy:", study.strategy, false),
                        3 => ("Execution:", study.execution, false),
                        4 => ("Result:", study.result, true),
                        _ => ("What I'd Test Next:", study.next_test, false),
                    };
                    view! {
                        <div>
                            <strong class="text-blue-900">{label}</strong>
                            <p
                                class="mt-2 text-lg"
                                class=("text-blue-900", emphasize)
                                class=("font-bold", emphasize)
                            >
                                {body}
                            </p>
                        </div>
                    }
                }}
            </div>

            <div class="flex justify-between">
                <button
                    on:click=move |_| on_step.run(true)
                    disabled=move || step.get().at_start()
                    class="px-6 py-2 border-2 border-blue-900 text-blue-900 font-semibold disabled:opacity-30 rounded"
                >
                    "Previous"
                </button>
                <button
                    on:click=move |_| on_step.run(false)
                    class="px-6 py-2 bg-blue-900 text-white font-semibold hover:scale-105 transition-transform rounded"
                >
                    {move || if step.get().at_end() { "Close" } else { "Next" }}
                </button>
            </div>
        </div>
    }
}
