use leptos::{html, prelude::*};

use super::reveal::use_reveal;
use super::theme::use_theme;

const WHAT_I_DO: [&str; 4] = [
    "Develop responsive web applications using modern technologies",
    "Create data visualizations using Power BI for insightful analytics",
    "Design smooth animations and interactions using GSAP",
    "Participate in hackathons to solve challenging problems",
];

#[component]
pub fn About() -> impl IntoView {
    let theme = use_theme();
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, 0.3);

    let card_class = move || {
        if theme.is_dark() {
            "dark-glass-card rounded-xl p-6"
        } else {
            "glass-card rounded-xl p-6"
        }
    };
    let body_class = move || {
        if theme.is_dark() {
            "text-gray-300 leading-relaxed"
        } else {
            "text-gray-700 leading-relaxed"
        }
    };

    view! {
        <section
            id="about"
            node_ref=section_ref
            class=move || {
                if theme.is_dark() {
                    "py-24 bg-gray-900 relative overflow-hidden"
                } else {
                    "py-24 bg-white relative overflow-hidden"
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
                    }>"About Me"</h2>
                </div>

                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div
                        class="reveal-left"
                        class:in-view=move || revealed()
                        style="transition-delay: 300ms"
                    >
                        <div class="relative">
                            <div class="w-full h-full absolute -left-4 -top-4 bg-blue-100 rounded-xl"></div>
                            <div class="w-full h-full absolute -right-4 -bottom-4 bg-indigo-100 rounded-xl"></div>
                            <div class="relative glass-card rounded-xl overflow-hidden aspect-square">
                                <img
                                    src="https://images.unsplash.com/photo-1498050108023-c5249f4df085"
                                    alt="Coding session"
                                    class="w-full h-full object-cover"
                                />
                            </div>
                        </div>
                    </div>

                    <div
                        class="flex flex-col gap-6 reveal-right"
                        class:in-view=move || revealed()
                        style="transition-delay: 500ms"
                    >
                        <div class=card_class>
                            <h3 class="text-2xl font-semibold mb-4">"Who I Am"</h3>
                            <p class=body_class>
                                "I'm a Frontend Developer passionate about building engaging and scalable web solutions. My focus is on creating interactive applications that deliver exceptional user experiences while maintaining clean, efficient code."
                            </p>
                        </div>

                        <div class=card_class>
                            <h3 class="text-2xl font-semibold mb-4">"What I Do"</h3>
                            <ul class=move || {
                                if theme.is_dark() {
                                    "space-y-3 text-gray-300"
                                } else {
                                    "space-y-3 text-gray-700"
                                }
                            }>
                                {WHAT_I_DO
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <li class="flex items-start">
                                                <svg
                                                    class="w-5 h-5 text-blue-600 mr-2 mt-1 flex-shrink-0"
                                                    fill="none"
                                                    stroke="currentColor"
                                                    viewBox="0 0 24 24"
                                                    xmlns="http://www.w3.org/2000/svg"
                                                >
                                                    <path
                                                        stroke-linecap="round"
                                                        stroke-linejoin="round"
                                                        stroke-width="2"
                                                        d="M5 13l4 4L19 7"
                                                    ></path>
                                                </svg>
                                                <span>{*item}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>

                        <div class=card_class>
                            <h3 class="text-2xl font-semibold mb-4">"My Approach"</h3>
                            <p class=body_class>
                                "I believe in continuous learning and innovation. My approach combines technical expertise with a keen eye for detail, ensuring that every project I work on is both functional and visually appealing. I'm passionate about collaboration and finding creative solutions to complex problems."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
