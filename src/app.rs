mod automation;
mod case_studies;
mod contact;
pub mod content;
mod experience;
mod gallery;
mod hero;
pub mod paging;
mod projects;
mod stories;
mod testimonials;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_mouse, use_window_scroll, UseMouseReturn};

use automation::AutomationSection;
use case_studies::CaseStudySection;
use contact::ContactSection;
use experience::ExperienceSection;
use gallery::GallerySection;
use hero::Hero;
use projects::ProjectsSection;
use stories::StoriesSection;
use testimonials::TestimonialsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Sonal Misra - {title}") />

        <Router>
            <main class="bg-gradient-to-br from-blue-50 via-cyan-50 to-blue-100 text-gray-900 relative overflow-x-hidden">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Backdrop />
        <Hero />
        <ExperienceSection />
        <CaseStudySection />
        <AutomationSection />
        <ProjectsSection />
        <StoriesSection />
        <TestimonialsSection />
        <GallerySection />
        <ContactSection />
    }
}

/// Drifting cloud layer behind every section. The big clouds get a slight
/// parallax offset from the window scroll position and the small ones trail
/// the pointer; both subscriptions are scoped to this component, so they are
/// dropped with it.
#[component]
fn Backdrop() -> impl IntoView {
    let (_scroll_x, scroll_y) = use_window_scroll();
    let UseMouseReturn { x, y, .. } = use_mouse();

    let cloud = |extra: &'static str, tint: &'static str, top: &'static str| {
        view! {
            <div
                class=format!("absolute rounded-full shadow-sm {extra}")
                style=format!("top: {top}")
            >
                <div class=format!(
                    "absolute inset-0 rounded-full opacity-40 blur-md {tint}",
                )></div>
            </div>
        }
    };

    view! {
        <div class="fixed inset-0 pointer-events-none z-0">
            <div style:transform=move || format!("translateY({:.1}px)", scroll_y.get() * -0.05)>
                {cloud(
                    "w-96 h-32 bg-white/60 animate-cloud-1",
                    "bg-gradient-to-r from-blue-50 via-white to-blue-50",
                    "10%",
                )}
                {cloud(
                    "w-80 h-28 bg-pink-50/60 animate-cloud-2",
                    "bg-gradient-to-r from-pink-100 via-pink-50 to-pink-100",
                    "30%",
                )}
                {cloud(
                    "w-72 h-24 bg-purple-50/60 animate-cloud-3",
                    "bg-gradient-to-r from-purple-100 via-purple-50 to-purple-100",
                    "50%",
                )}
                {cloud(
                    "w-88 h-30 bg-cyan-50/60 animate-cloud-4",
                    "bg-gradient-to-r from-cyan-100 via-cyan-50 to-cyan-100",
                    "70%",
                )}
                {cloud(
                    "w-64 h-20 bg-yellow-50/50 animate-cloud-5",
                    "bg-gradient-to-r from-yellow-100 via-yellow-50 to-yellow-100",
                    "88%",
                )}
            </div>
            <div style:transform=move || {
                format!("translate({:.1}px, {:.1}px)", x.get() * 0.01, y.get() * 0.01)
            }>
                <div
                    class="absolute w-60 h-24 bg-indigo-50/60 rounded-full shadow-sm animate-cloud-small-1"
                    style="top: 25%; left: 45%"
                ></div>
                <div
                    class="absolute w-56 h-22 bg-teal-50/60 rounded-full shadow-sm animate-cloud-small-2"
                    style="top: 55%; right: 40%"
                ></div>
            </div>
        </div>
    }
}
