use leptos::{html, prelude::*};

use super::reveal::use_reveal;
use super::theme::use_theme;
use crate::content::{CertificationEntry, CERTIFICATIONS};

#[component]
pub fn Certifications() -> impl IntoView {
    let theme = use_theme();
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, 0.2);

    view! {
        <section
            id="certifications"
            node_ref=section_ref
            class=move || {
                if theme.is_dark() { "py-24 bg-gray-900" } else { "py-24 bg-white" }
            }
        >
            <div class="container mx-auto px-6">
                <div class="text-center mb-16 reveal" class:in-view=move || revealed()>
                    <h2 class=move || {
                        if theme.is_dark() {
                            "section-title text-gradient-dark"
                        } else {
                            "section-title text-gradient"
                        }
                    }>"Certifications"</h2>
                    <p class=move || {
                        if theme.is_dark() {
                            "text-gray-300 max-w-2xl mx-auto"
                        } else {
                            "text-gray-600 max-w-2xl mx-auto"
                        }
                    }>"Professional certifications and credentials"</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-5xl mx-auto">
                    {CERTIFICATIONS
                        .iter()
                        .map(|certification| view! { <CertificationCard certification revealed /> })
                        .collect_view()}
                </div>

                <div
                    class="mt-16 text-center reveal"
                    class:in-view=move || revealed()
                    style="transition-delay: 600ms"
                >
                    <p class=move || {
                        if theme.is_dark() { "text-gray-300" } else { "text-gray-600" }
                    }>
                        "Always expanding my knowledge through continuous learning and new certifications."
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CertificationCard(
    certification: &'static CertificationEntry,
    revealed: Signal<bool>,
) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div
            class=move || {
                if theme.is_dark() {
                    "dark-glass-card rounded-xl overflow-hidden hover:shadow-xl transition-all duration-300 reveal"
                } else {
                    "glass-card rounded-xl overflow-hidden hover:shadow-xl transition-all duration-300 reveal"
                }
            }
            class:in-view=move || revealed()
            style=format!("transition-delay: {}ms", certification.delay_ms)
        >
            <div class="h-3 bg-gradient-to-r from-blue-500 to-indigo-600"></div>
            <div class="p-6">
                <div class="flex justify-between items-start mb-4">
                    <div>
                        <h3 class="text-xl font-semibold mb-1">{certification.name}</h3>
                        <p class=move || {
                            if theme.is_dark() { "text-gray-300" } else { "text-gray-600" }
                        }>{certification.issuer}</p>
                        <div class="flex items-center gap-2 mt-1">
                            <span class=move || {
                                if theme.is_dark() {
                                    "text-sm text-gray-400"
                                } else {
                                    "text-sm text-gray-500"
                                }
                            }>{certification.date}</span>
                            <span class="w-1 h-1 rounded-full bg-gray-300"></span>
                            <span class="text-sm text-green-600 font-medium">
                                {certification.valid_until}
                            </span>
                        </div>
                    </div>
                    <img
                        src=certification.logo
                        alt=certification.issuer
                        class="w-12 h-12 object-contain rounded-md"
                    />
                </div>
                <p class=move || {
                    if theme.is_dark() { "text-gray-300" } else { "text-gray-700" }
                }>{certification.description}</p>

                <div class=move || {
                    if theme.is_dark() {
                        "mt-4 pt-4 border-t border-gray-700"
                    } else {
                        "mt-4 pt-4 border-t border-gray-100"
                    }
                }>
                    <div class="flex justify-between items-center">
                        <div class="flex items-center gap-1">
                            <svg
                                class="w-4 h-4 text-blue-600"
                                fill="currentColor"
                                viewBox="0 0 24 24"
                                xmlns="http://www.w3.org/2000/svg"
                            >
                                <path d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"></path>
                            </svg>
                            <span class=move || {
                                if theme.is_dark() {
                                    "text-sm text-gray-300"
                                } else {
                                    "text-sm text-gray-600"
                                }
                            }>"Verified"</span>
                        </div>
                        <a href="#" class="text-sm text-blue-600 hover:underline">
                            "View Certificate"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
