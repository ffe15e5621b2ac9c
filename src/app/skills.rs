use leptos::{html, prelude::*};

use super::reveal::use_reveal;
use super::theme::use_theme;
use crate::content::{SkillEntry, SKILLS};

#[component]
pub fn Skills() -> impl IntoView {
    let theme = use_theme();
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, 0.2);

    view! {
        <section
            id="skills"
            node_ref=section_ref
            class=move || {
                if theme.is_dark() {
                    "py-24 bg-gradient-to-b from-gray-900 to-gray-800"
                } else {
                    "py-24 bg-gradient-to-b from-white to-gray-50"
                }
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
                    }>"My Skills"</h2>
                    <p class=move || {
                        if theme.is_dark() {
                            "text-gray-300 max-w-2xl mx-auto"
                        } else {
                            "text-gray-600 max-w-2xl mx-auto"
                        }
                    }>
                        "These are the technologies and skills I've worked with and continue to develop"
                    </p>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {SKILLS
                        .iter()
                        .map(|skill| view! { <SkillCard skill revealed /> })
                        .collect_view()}
                </div>

                <div
                    class=move || {
                        if theme.is_dark() {
                            "mt-20 dark-glass-card rounded-xl p-8 reveal"
                        } else {
                            "mt-20 glass-card rounded-xl p-8 reveal"
                        }
                    }
                    class:in-view=move || revealed()
                    style="transition-delay: 900ms"
                >
                    <h3 class="text-2xl font-semibold mb-6 text-center">"Interactive Skill Graph"</h3>
                    <SkillGraph revealed />
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: &'static SkillEntry, revealed: Signal<bool>) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div
            class=move || {
                if theme.is_dark() { "skill-card-dark reveal" } else { "skill-card reveal" }
            }
            class:in-view=move || revealed()
            style=format!("transition-delay: {}ms", skill.delay_ms)
        >
            <div class="flex flex-col items-center text-center">
                <div class=format!("text-4xl {} mb-4", skill.color)>
                    <i class=skill.icon></i>
                </div>
                <h3 class="text-lg font-medium">{skill.name}</h3>
            </div>
        </div>
    }
}

/// Proficiency bars animate from zero to the recorded level once the
/// section is revealed.
#[component]
fn SkillGraph(revealed: Signal<bool>) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="space-y-5">
            {SKILLS
                .iter()
                .enumerate()
                .map(|(index, skill)| {
                    view! {
                        <div class="space-y-2">
                            <div class="flex justify-between">
                                <span class="text-sm font-medium">{skill.name}</span>
                                <span class="text-sm font-medium">{skill.level}"%"</span>
                            </div>
                            <div class=move || {
                                if theme.is_dark() {
                                    "w-full bg-gray-700 rounded-full h-2.5"
                                } else {
                                    "w-full bg-gray-200 rounded-full h-2.5"
                                }
                            }>
                                <div
                                    class="h-2.5 rounded-full bg-gradient-to-r from-blue-600 to-indigo-600 transition-all duration-1000"
                                    style:transition-delay=format!("{}ms", 200 + index * 100)
                                    style:width=move || {
                                        if revealed() {
                                            format!("{}%", skill.level)
                                        } else {
                                            "0%".to_string()
                                        }
                                    }
                                ></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
