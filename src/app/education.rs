use leptos::{html, prelude::*};

use super::reveal::use_reveal;
use super::theme::use_theme;
use crate::content::{EducationEntry, EDUCATION};

#[component]
pub fn Education() -> impl IntoView {
    let theme = use_theme();
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, 0.2);

    view! {
        <section
            id="education"
            node_ref=section_ref
            class=move || {
                if theme.is_dark() { "py-24 bg-gray-800" } else { "py-24 bg-gray-50" }
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
                    }>"Education"</h2>
                    <p class=move || {
                        if theme.is_dark() {
                            "text-gray-300 max-w-2xl mx-auto"
                        } else {
                            "text-gray-600 max-w-2xl mx-auto"
                        }
                    }>"My academic journey and qualifications"</p>
                </div>

                <div class="relative max-w-3xl mx-auto">
                    // Timeline line
                    <div class=move || {
                        if theme.is_dark() {
                            "absolute left-1/2 transform -translate-x-1/2 h-full w-0.5 bg-gray-600"
                        } else {
                            "absolute left-1/2 transform -translate-x-1/2 h-full w-0.5 bg-gray-200"
                        }
                    }></div>

                    <div class="space-y-16">
                        {EDUCATION
                            .iter()
                            .enumerate()
                            .map(|(index, item)| {
                                let is_even = index % 2 == 0;
                                view! { <EducationItem item revealed is_even /> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Timeline card; entries alternate sides of the center line.
#[component]
fn EducationItem(
    item: &'static EducationEntry,
    revealed: Signal<bool>,
    is_even: bool,
) -> impl IntoView {
    let theme = use_theme();
    let delay = format!("transition-delay: {}ms", item.delay_ms);

    view! {
        <div class="relative">
            // Timeline dot
            <div class="absolute left-1/2 transform -translate-x-1/2 -translate-y-1/3">
                <div
                    class="w-5 h-5 rounded-full bg-blue-600 border-4 border-white shadow reveal-pop"
                    class:in-view=move || revealed()
                    style=delay.clone()
                ></div>
            </div>

            <div
                class=move || {
                    let side = if is_even { "flex-row-reverse" } else { "flex-row" };
                    let slide = if is_even { "reveal-left" } else { "reveal-right" };
                    format!("flex items-center {side} {slide}")
                }
                class:in-view=move || revealed()
                style=delay
            >
                <div class=if is_even { "w-1/2 pl-8 text-right" } else { "w-1/2 pr-8 text-left" }>
                    <div class=move || {
                        if theme.is_dark() {
                            "dark-glass-card rounded-xl p-6 hover:shadow-xl transition-shadow duration-300"
                        } else {
                            "glass-card rounded-xl p-6 hover:shadow-xl transition-shadow duration-300"
                        }
                    }>
                        <div class="flex items-center mb-4 gap-3 justify-between">
                            <div>
                                <h3 class="text-xl font-semibold">{item.institution}</h3>
                                <p class=move || {
                                    if theme.is_dark() { "text-gray-300" } else { "text-gray-600" }
                                }>{item.degree}</p>
                                <p class=move || {
                                    if theme.is_dark() {
                                        "text-sm text-gray-400"
                                    } else {
                                        "text-sm text-gray-500"
                                    }
                                }>{item.years}</p>
                            </div>
                            <img
                                src=item.logo
                                alt=item.institution
                                class="w-12 h-12 object-contain rounded-md"
                            />
                        </div>
                        <p class=move || {
                            if theme.is_dark() { "text-gray-300" } else { "text-gray-700" }
                        }>{item.description}</p>
                    </div>
                </div>
                <div class="w-1/2"></div>
            </div>
        </div>
    }
}
