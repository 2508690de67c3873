use leptos::either::Either;
use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_interval_fn, use_window};

use super::content::{BLOG_URL, GALLERY_CAPTION, GALLERY_INTERVAL_MS, STREET_PHOTOS};
use super::paging::SequenceCursor;

#[component]
pub fn GallerySection() -> impl IntoView {
    // Some(start index) while the modal viewer is open
    let (viewer, set_viewer) = signal(None::<usize>);

    view! {
        <section class="py-24 px-6 relative">
            <div class="max-w-5xl mx-auto relative z-10">
                <h2 class="text-5xl font-bold text-blue-900 mb-4 flex items-center gap-3">
                    <span class="inline-block relative" style="width: 60px; height: 40px">
                        <span class="eyeball-container">
                            <span class="eyeball-white"></span>
                            <span class="eyeball-pupil animate-pupil-move"></span>
                        </span>
                        <span class="eyeball-container" style="left: 32px">
                            <span class="eyeball-white"></span>
                            <span class="eyeball-pupil animate-pupil-move"></span>
                        </span>
                    </span>
                    <span>"Offline, but still curious."</span>
                </h2>
                <p class="text-xl text-gray-600 mb-12">
                    "Everything I do outside work makes me better at it."
                </p>

                <EmbeddedCarousel
                    photos=&STREET_PHOTOS
                    on_open=move |idx| set_viewer.set(Some(idx))
                />

                <div class="mt-12 text-center">
                    <a
                        href=BLOG_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 px-8 py-4 bg-blue-900 text-white font-semibold rounded-lg hover:bg-blue-800 transition-all hover:scale-105 shadow-lg"
                    >
                        <span class="text-2xl">"✍️"</span>
                        <span>"Read my blog"</span>
                    </a>
                </div>
            </div>

            {move || {
                viewer
                    .get()
                    .map(|start| {
                        view! {
                            <PhotoViewer
                                photos=&STREET_PHOTOS
                                caption=GALLERY_CAPTION
                                start
                                on_dismiss=move |_| set_viewer.set(None)
                            />
                        }
                    })
            }}
        </section>
    }
}

/// In-page carousel that advances on its own every `GALLERY_INTERVAL_MS`.
/// The timer lives and dies with this component. Clicking the photo opens
/// the modal viewer on the frame being shown.
#[component]
fn EmbeddedCarousel(
    photos: &'static [&'static str],
    #[prop(into)] on_open: Callback<usize>,
) -> impl IntoView {
    let (cursor, set_cursor) = signal(SequenceCursor::cyclic(photos.len()));

    use_interval_fn(
        move || set_cursor.update(|c| c.next()),
        GALLERY_INTERVAL_MS,
    );

    if photos.is_empty() {
        return Either::Left(view! { <div class="text-center text-gray-500">"No photos available"</div> });
    }

    Either::Right(view! {
        <div class="max-w-6xl mx-auto">
            <div class="rounded-lg overflow-hidden shadow-xl">
                <div class="relative bg-gray-200">
                    <img
                        src=move || photos[cursor.get().index()]
                        alt=move || format!("{} {}", GALLERY_CAPTION, cursor.get().index() + 1)
                        class="w-full h-[85vh] object-cover cursor-zoom-in"
                        on:click=move |_| on_open.run(cursor.get_untracked().index())
                    />

                    {move || {
                        cursor
                            .get()
                            .has_nav()
                            .then(|| {
                                view! {
                                    <CarouselArrow
                                        forward=false
                                        on_step=move |_| set_cursor.update(|c| c.previous())
                                    />
                                    <CarouselArrow
                                        forward=true
                                        on_step=move |_| set_cursor.update(|c| c.next())
                                    />
                                }
                            })
                    }}

                    <div class="absolute bottom-4 right-4 bg-black/50 text-white px-3 py-1 rounded-full text-sm">
                        {move || cursor.get().position_label()}
                    </div>
                </div>
            </div>
        </div>
    })
}

/// Full-screen photo viewer. Dismissed by the close button, a click on the
/// backdrop, or Escape; the keydown listener is window-level and removed
/// when this component unmounts.
#[component]
fn PhotoViewer(
    photos: &'static [&'static str],
    caption: &'static str,
    start: usize,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    let (cursor, set_cursor) = signal({
        let mut c = SequenceCursor::cyclic(photos.len());
        // out-of-range start falls back to the first photo
        let _ = c.jump_to(start);
        c
    });

    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_dismiss.run(());
        }
    });

    view! {
        <div
            class="fixed inset-0 bg-black/90 z-50 flex items-center justify-center p-4"
            on:click=move |_| on_dismiss.run(())
        >
            <div class="relative max-w-4xl w-full" on:click=move |ev| ev.stop_propagation()>
                <button
                    on:click=move |_| on_dismiss.run(())
                    class="absolute top-4 right-4 z-10 bg-white text-black rounded-full p-2 hover:bg-gray-200 transition-colors text-xl leading-none"
                >
                    "✕"
                </button>

                {move || {
                    let c = cursor.get();
                    if c.is_empty() {
                        Either::Left(
                            view! {
                                <div class="bg-white rounded-lg p-12 text-center text-gray-500">
                                    "No photos available"
                                </div>
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                <div class="bg-white rounded-lg overflow-hidden shadow-2xl">
                                    <img
                                        src=photos[c.index()]
                                        alt=format!("{} {}", caption, c.index() + 1)
                                        class="w-full h-[70vh] object-contain bg-gray-100"
                                    />
                                    <div class="p-4 bg-white">
                                        <div class="flex justify-between items-center">
                                            <h3 class="text-xl font-bold text-blue-900">{caption}</h3>
                                            <span class="text-gray-600">{c.position_label()}</span>
                                        </div>
                                    </div>
                                </div>
                            },
                        )
                    }
                }}

                {move || {
                    cursor
                        .get()
                        .has_nav()
                        .then(|| {
                            view! {
                                <ViewerArrow
                                    forward=false
                                    on_step=move |_| set_cursor.update(|c| c.previous())
                                />
                                <ViewerArrow
                                    forward=true
                                    on_step=move |_| set_cursor.update(|c| c.next())
                                />
                                <div class="flex justify-center gap-2 mt-4">
                                    {(0..photos.len())
                                        .map(|idx| {
                                            view! {
                                                <button
                                                    on:click=move |_| {
                                                        set_cursor
                                                            .update(|c| {
                                                                let _ = c.jump_to(idx);
                                                            })
                                                    }
                                                    class="h-3 rounded-full transition-all"
                                                    class=("bg-white", move || cursor.get().index() == idx)
                                                    class=("w-8", move || cursor.get().index() == idx)
                                                    class=("bg-gray-400", move || cursor.get().index() != idx)
                                                    class=("w-3", move || cursor.get().index() != idx)
                                                ></button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}

#[component]
fn CarouselArrow(forward: bool, #[prop(into)] on_step: Callback<()>) -> impl IntoView {
    view! {
        <button
            on:click=move |ev| {
                ev.stop_propagation();
                on_step.run(());
            }
            class="absolute top-1/2 -translate-y-1/2 bg-white/90 text-black rounded-full p-3 hover:bg-white transition-colors shadow-lg"
            class=("left-4", !forward)
            class=("right-4", forward)
        >
            {if forward { "›" } else { "‹" }}
        </button>
    }
}

#[component]
fn ViewerArrow(forward: bool, #[prop(into)] on_step: Callback<()>) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_step.run(())
            class="absolute top-1/2 -translate-y-1/2 bg-white text-black rounded-full p-3 hover:bg-gray-200 transition-colors shadow-lg"
            class=("left-4", !forward)
            class=("right-4", forward)
        >
            {if forward { "›" } else { "‹" }}
        </button>
    }
}
