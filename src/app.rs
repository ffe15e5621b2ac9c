mod about;
mod certifications;
mod contact;
mod education;
mod header;
mod hero;
mod reveal;
mod skills;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use certifications::Certifications;
use contact::Contact;
use education::Education;
use header::Header;
use hero::Hero;
use skills::Skills;
use theme::{provide_theme_context, use_theme};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/npm/remixicon@2.5.0/fonts/remixicon.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Chirag Pandit - {title}") />

        // keeps stylesheet-level `.dark` selectors in sync with the theme flag
        <Html attr:class=move || theme.root_class() />

        <Router>
            <div class=move || {
                if theme.is_dark() {
                    "min-h-screen bg-gray-900 text-gray-100"
                } else {
                    "min-h-screen bg-white text-gray-900"
                }
            }>
                <Header />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

/// The single page: every section in document order, each gating its own
/// reveal animation.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <Education />
        <Certifications />
        <Contact />
    }
}

#[component]
fn Footer() -> impl IntoView {
    let theme = use_theme();

    view! {
        <footer class=move || {
            if theme.is_dark() {
                "py-6 bg-gray-800 border-t border-gray-700"
            } else {
                "py-6 bg-gray-50 border-t border-gray-200"
            }
        }>
            <div class="container mx-auto px-6 text-center">
                <p class=move || {
                    if theme.is_dark() { "text-gray-400 text-sm" } else { "text-gray-600 text-sm" }
                }>"© " {env!("BUILD_YEAR")} " Chirag Pandit. All rights reserved."</p>
            </div>
        </footer>
    }
}
