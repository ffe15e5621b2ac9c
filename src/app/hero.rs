use leptos::{ev::MouseEvent, html, prelude::*};

use super::theme::use_theme;

const PORTRAIT_URL: &str = "https://media.licdn.com/dms/image/v2/D5603AQHjBMNE8lhDfg/profile-displayphoto-shrink_800_800/B56ZVSk7tFHQAc-/0/1740847169894";

/// Hero banner. Plays its entry animation on mount and nudges the
/// portrait up to +/-10px toward the pointer.
#[component]
pub fn Hero() -> impl IntoView {
    let theme = use_theme();
    let hero_ref = NodeRef::<html::Section>::new();
    let (offset, set_offset) = signal((0.0_f64, 0.0_f64));

    let on_mouse_move = move |ev: MouseEvent| {
        let el = if let Some(el) = hero_ref.get_untracked() {
            el
        } else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let x = (f64::from(ev.client_x()) - rect.left()) / rect.width();
        let y = (f64::from(ev.client_y()) - rect.top()) / rect.height();
        set_offset(((x - 0.5) * 20.0, (y - 0.5) * 20.0));
    };

    view! {
        <section
            id="home"
            node_ref=hero_ref
            on:mousemove=on_mouse_move
            class="min-h-screen flex items-center py-20 relative overflow-hidden"
        >
            <div class="absolute inset-0 -z-10">
                <div class=move || {
                    if theme.is_dark() {
                        "absolute inset-0 bg-gradient-to-br from-gray-900 to-gray-800 opacity-70"
                    } else {
                        "absolute inset-0 bg-gradient-to-br from-blue-50 to-indigo-50 opacity-70"
                    }
                }></div>
                <div class="absolute top-1/4 right-1/4 w-64 h-64 bg-blue-200 rounded-full blur-3xl opacity-20 animate-float"></div>
                <div class="absolute bottom-1/4 left-1/4 w-96 h-96 bg-indigo-200 rounded-full blur-3xl opacity-20 animate-float"></div>
            </div>

            <div class="container mx-auto px-6 flex flex-col md:flex-row items-center justify-between">
                <div class="md:w-1/2 mb-10 md:mb-0 enter-up">
                    <div
                        class=move || {
                            if theme.is_dark() {
                                "inline-block mb-3 px-3 py-1 bg-blue-900 text-blue-300 rounded-full text-sm font-medium enter-fade"
                            } else {
                                "inline-block mb-3 px-3 py-1 bg-blue-50 text-blue-600 rounded-full text-sm font-medium enter-fade"
                            }
                        }
                        style="animation-delay: 300ms"
                    >
                        "Frontend Developer"
                    </div>

                    <h1
                        class="text-4xl md:text-5xl lg:text-6xl font-bold mb-4 enter-fade"
                        style="animation-delay: 400ms"
                    >
                        "Hi, I'm " <span class="text-gradient">"Chirag Pandit"</span>
                    </h1>

                    <p
                        class=move || {
                            if theme.is_dark() {
                                "text-lg text-gray-300 mb-8 max-w-lg enter-fade"
                            } else {
                                "text-lg text-gray-600 mb-8 max-w-lg enter-fade"
                            }
                        }
                        style="animation-delay: 500ms"
                    >
                        "A passionate frontend developer specializing in creating interactive and responsive web applications with a focus on user experience."
                    </p>

                    <div class="flex gap-4 enter-fade" style="animation-delay: 600ms">
                        <a
                            href="#contact"
                            class="px-6 py-3 bg-black text-white rounded-lg font-medium hover:bg-gray-800 transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-gray-900"
                        >
                            "Get in Touch"
                        </a>
                        <a
                            href="#skills"
                            class=move || {
                                if theme.is_dark() {
                                    "px-6 py-3 border border-gray-600 rounded-lg font-medium hover:bg-gray-800 transition-colors focus:outline-none"
                                } else {
                                    "px-6 py-3 border border-gray-300 rounded-lg font-medium hover:bg-gray-50 transition-colors focus:outline-none"
                                }
                            }
                        >
                            "Explore Skills"
                        </a>
                    </div>
                </div>

                <div class="md:w-1/2 flex justify-center enter-scale" style="animation-delay: 200ms">
                    <div class="relative">
                        <div class="absolute inset-0 bg-gradient-to-tr from-blue-500 to-indigo-500 rounded-full blur-3xl opacity-20"></div>
                        <div
                            class="profile-image relative w-72 h-72 md:w-80 md:h-80 rounded-full overflow-hidden border-4 border-white shadow-xl transition-transform duration-200"
                            style:transform=move || {
                                let (x, y) = offset();
                                format!("translate({x:.1}px, {y:.1}px)")
                            }
                        >
                            <img
                                src=PORTRAIT_URL
                                alt="Chirag Pandit"
                                class="w-full h-full object-cover"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
