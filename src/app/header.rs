use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::theme::use_theme;

/// Fixed navigation bar. Gains a blur/compact style once the window has
/// scrolled past 10px, and hosts the theme toggle.
#[component]
pub fn Header() -> impl IntoView {
    let theme = use_theme();
    let (_scroll_x, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| scroll_y() > 10.0);

    view! {
        <header class=move || {
            let base = "fixed top-0 left-0 right-0 z-50 transition-all duration-300";
            if scrolled() {
                if theme.is_dark() {
                    format!("{base} navbar-blur-dark py-3 border-b border-gray-700/30")
                } else {
                    format!("{base} navbar-blur py-3 border-b border-gray-200/30")
                }
            } else {
                format!("{base} py-6")
            }
        }>
            <div class="container mx-auto px-6 flex items-center justify-between">
                <div class="flex items-center">
                    <div class="text-xl font-medium">
                        <span class="font-bold">"Chirag"</span>
                        " Pandit"
                    </div>
                </div>

                <nav class="hidden md:flex items-center space-x-8">
                    <NavLink href="#home" label="Home" />
                    <NavLink href="#about" label="About" />
                    <NavLink href="#skills" label="Skills" />
                    <NavLink href="#education" label="Education" />
                    <NavLink href="#certifications" label="Certifications" />
                    <NavLink href="#contact" label="Contact" />
                </nav>

                <div class="flex items-center gap-4">
                    <button
                        on:click=move |_| theme.toggle()
                        class=move || {
                            if theme.is_dark() {
                                "p-2 rounded-full text-yellow-300 hover:bg-gray-800 transition-colors focus:outline-none"
                            } else {
                                "p-2 rounded-full text-gray-700 hover:bg-gray-100 transition-colors focus:outline-none"
                            }
                        }
                        aria-label="Toggle Theme"
                    >
                        <i class=move || {
                            if theme.is_dark() { "ri-sun-line text-xl" } else { "ri-moon-line text-xl" }
                        }></i>
                    </button>

                    <div class="md:hidden flex items-center">
                        <button class="focus:outline-none" aria-label="Toggle Menu">
                            <svg
                                xmlns="http://www.w3.org/2000/svg"
                                class="h-6 w-6"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M4 6h16M4 12h16M4 18h16"
                                />
                            </svg>
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    let theme = use_theme();

    view! {
        <a
            href=href
            class=move || {
                if theme.is_dark() {
                    "link-underline text-sm font-medium text-gray-200 hover:text-white"
                } else {
                    "link-underline text-sm font-medium text-gray-800 hover:text-black"
                }
            }
        >
            {label}
        </a>
    }
}
