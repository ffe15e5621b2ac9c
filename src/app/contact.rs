use leptos::{ev::SubmitEvent, html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::reveal::use_reveal;
use super::theme::use_theme;
use crate::state::{ContactForm, FormStatus};

/// Simulated delivery delay; there is no network call behind the form.
const SUBMIT_DELAY_MS: f64 = 1500.0;
/// How long the success banner stays up before returning to idle.
const SUCCESS_BANNER_MS: f64 = 3000.0;

#[component]
pub fn Contact() -> impl IntoView {
    let theme = use_theme();
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, 0.2);

    let form = RwSignal::new(ContactForm::default());

    let UseTimeoutFnReturn {
        start: start_expire,
        stop: stop_expire,
        ..
    } = use_timeout_fn(
        move |_: ()| form.write().expire_success(),
        SUCCESS_BANNER_MS,
    );

    let UseTimeoutFnReturn {
        start: start_deliver,
        stop: stop_deliver,
        ..
    } = use_timeout_fn(
        move |_: ()| {
            form.write().finish_submit();
            start_expire(());
        },
        SUBMIT_DELAY_MS,
    );

    // pending timers must not mutate state after the section is torn down
    on_cleanup(move || {
        stop_deliver();
        stop_expire();
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.write().submit() {
            Ok(()) => start_deliver(()),
            // native `required` validation keeps this branch theoretical
            Err(err) => log::warn!("submission rejected: {err}"),
        }
    };

    let label_class = move || {
        if theme.is_dark() {
            "block text-sm font-medium text-gray-300 mb-1"
        } else {
            "block text-sm font-medium text-gray-700 mb-1"
        }
    };
    let input_class = move || {
        if theme.is_dark() {
            "w-full px-4 py-3 rounded-lg border bg-gray-800 border-gray-700 text-white focus:ring-blue-500 focus:outline-none focus:ring-2 focus:border-transparent transition-colors"
        } else {
            "w-full px-4 py-3 rounded-lg border border-gray-300 focus:ring-blue-500 focus:outline-none focus:ring-2 focus:border-transparent transition-colors"
        }
    };

    view! {
        <section
            id="contact"
            node_ref=section_ref
            class=move || {
                if theme.is_dark() {
                    "py-24 bg-gradient-to-b from-gray-800 to-gray-900 text-white"
                } else {
                    "py-24 bg-gradient-to-b from-gray-50 to-white"
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
                    }>"Get In Touch"</h2>
                    <p class=move || {
                        if theme.is_dark() {
                            "text-gray-300 max-w-2xl mx-auto"
                        } else {
                            "text-gray-600 max-w-2xl mx-auto"
                        }
                    }>
                        "Have a project in mind or want to collaborate? I'd love to hear from you!"
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-12 max-w-6xl mx-auto">
                    <div
                        class="reveal-left"
                        class:in-view=move || revealed()
                        style="transition-delay: 400ms"
                    >
                        <ContactInfo />
                    </div>

                    <div
                        class="reveal-right"
                        class:in-view=move || revealed()
                        style="transition-delay: 600ms"
                    >
                        <div class=move || {
                            if theme.is_dark() {
                                "dark-glass-card rounded-xl p-8"
                            } else {
                                "glass-card rounded-xl p-8"
                            }
                        }>
                            <h3 class="text-2xl font-semibold mb-6">"Send a Message"</h3>

                            <form on:submit=on_submit class="space-y-6">
                                <div>
                                    <label for="name" class=label_class>
                                        "Name"
                                    </label>
                                    <input
                                        type="text"
                                        id="name"
                                        name="name"
                                        prop:value=move || form.with(|f| f.name.clone())
                                        on:input=move |ev| form.write().name = event_target_value(&ev)
                                        class=input_class
                                        placeholder="Your name"
                                        required=true
                                    />
                                </div>

                                <div>
                                    <label for="email" class=label_class>
                                        "Email"
                                    </label>
                                    <input
                                        type="email"
                                        id="email"
                                        name="email"
                                        prop:value=move || form.with(|f| f.email.clone())
                                        on:input=move |ev| form.write().email = event_target_value(&ev)
                                        class=input_class
                                        placeholder="Your email"
                                        required=true
                                    />
                                </div>

                                <div>
                                    <label for="message" class=label_class>
                                        "Message"
                                    </label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        rows=5
                                        prop:value=move || form.with(|f| f.message.clone())
                                        on:input=move |ev| {
                                            form.write().message = event_target_value(&ev)
                                        }
                                        class=input_class
                                        placeholder="Your message"
                                        required=true
                                    ></textarea>
                                </div>

                                <div class="pt-2">
                                    <button
                                        type="submit"
                                        prop:disabled=move || form.with(|f| f.is_submitting())
                                        class=move || {
                                            if theme.is_dark() {
                                                "w-full bg-blue-600 hover:bg-blue-700 text-white font-medium py-3 px-6 rounded-lg transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-gray-900 disabled:opacity-70"
                                            } else {
                                                "w-full bg-black hover:bg-gray-800 text-white font-medium py-3 px-6 rounded-lg transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-gray-900 disabled:opacity-70"
                                            }
                                        }
                                    >
                                        {move || {
                                            if form.with(|f| f.is_submitting()) {
                                                "Sending..."
                                            } else {
                                                "Send Message"
                                            }
                                        }}
                                    </button>
                                </div>

                                {move || {
                                    (form.with(|f| f.status) == FormStatus::Success)
                                        .then(|| {
                                            view! {
                                                <div class=move || {
                                                    if theme.is_dark() {
                                                        "mt-4 p-3 bg-green-900 text-green-300 rounded-lg"
                                                    } else {
                                                        "mt-4 p-3 bg-green-50 text-green-800 rounded-lg"
                                                    }
                                                }>
                                                    "Your message has been sent successfully. I'll get back to you soon!"
                                                </div>
                                            }
                                        })
                                }}
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let theme = use_theme();

    let icon_wrap_class = move || {
        if theme.is_dark() {
            "bg-blue-900 rounded-lg p-3 mr-4"
        } else {
            "bg-blue-100 rounded-lg p-3 mr-4"
        }
    };
    let icon_class = move || {
        if theme.is_dark() {
            "w-6 h-6 text-blue-400"
        } else {
            "w-6 h-6 text-blue-600"
        }
    };
    let link_class = move || {
        if theme.is_dark() {
            "text-blue-400 hover:underline"
        } else {
            "text-blue-600 hover:underline"
        }
    };

    view! {
        <div class=move || {
            if theme.is_dark() {
                "dark-glass-card rounded-xl p-8 h-full"
            } else {
                "glass-card rounded-xl p-8 h-full"
            }
        }>
            <h3 class="text-2xl font-semibold mb-6">"Contact Information"</h3>

            <div class="space-y-6">
                <div class="flex items-start">
                    <div class=icon_wrap_class>
                        <svg
                            class=icon_class
                            fill="none"
                            stroke="currentColor"
                            viewBox="0 0 24 24"
                            xmlns="http://www.w3.org/2000/svg"
                        >
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"
                            ></path>
                        </svg>
                    </div>
                    <div>
                        <h4 class="text-lg font-medium mb-1">"Email"</h4>
                        <a href="mailto:chiragpandit884@gmail.com" class=link_class>
                            "chiragpandit884@gmail.com"
                        </a>
                    </div>
                </div>

                <div class="flex items-start">
                    <div class=icon_wrap_class>
                        <svg
                            class=icon_class
                            fill="none"
                            stroke="currentColor"
                            viewBox="0 0 24 24"
                            xmlns="http://www.w3.org/2000/svg"
                        >
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z"
                            ></path>
                        </svg>
                    </div>
                    <div>
                        <h4 class="text-lg font-medium mb-1">"Phone"</h4>
                        <a href="tel:+919818879172" class=link_class>
                            "+91 98188 79172"
                        </a>
                    </div>
                </div>

                <div class="flex items-start">
                    <div class=icon_wrap_class>
                        <svg
                            class=icon_class
                            fill="none"
                            stroke="currentColor"
                            viewBox="0 0 24 24"
                            xmlns="http://www.w3.org/2000/svg"
                        >
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z"
                            ></path>
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M15 11a3 3 0 11-6 0 3 3 0 016 0z"
                            ></path>
                        </svg>
                    </div>
                    <div>
                        <h4 class="text-lg font-medium mb-1">"Location"</h4>
                        <p class=move || {
                            if theme.is_dark() { "text-gray-300" } else { "text-gray-700" }
                        }>"New Delhi, India"</p>
                    </div>
                </div>
            </div>

            <div class="mt-10">
                <h4 class="text-lg font-medium mb-4">"Connect with me"</h4>
                <div class="flex space-x-4">
                    <a
                        href="https://www.linkedin.com/in/chiragpandit/"
                        target="_blank"
                        rel="noopener"
                        aria-label="LinkedIn Profile"
                        class=move || {
                            if theme.is_dark() {
                                "bg-blue-900 text-blue-400 hover:bg-blue-800 p-3 rounded-full transition-colors"
                            } else {
                                "bg-blue-100 hover:bg-blue-200 text-blue-600 p-3 rounded-full transition-colors"
                            }
                        }
                    >
                        <i class="ri-linkedin-fill text-xl"></i>
                    </a>
                    <a
                        href="https://github.com/chiragpandit"
                        target="_blank"
                        rel="noopener"
                        aria-label="GitHub Profile"
                        class=move || {
                            if theme.is_dark() {
                                "bg-gray-800 text-gray-400 hover:bg-gray-700 p-3 rounded-full transition-colors"
                            } else {
                                "bg-gray-100 hover:bg-gray-200 text-gray-700 p-3 rounded-full transition-colors"
                            }
                        }
                    >
                        <i class="ri-github-fill text-xl"></i>
                    </a>
                    <a
                        href="https://twitter.com/chiragpandit"
                        target="_blank"
                        rel="noopener"
                        aria-label="Twitter Profile"
                        class=move || {
                            if theme.is_dark() {
                                "bg-blue-900 text-blue-400 hover:bg-blue-800 p-3 rounded-full transition-colors"
                            } else {
                                "bg-blue-100 hover:bg-blue-200 text-blue-600 p-3 rounded-full transition-colors"
                            }
                        }
                    >
                        <i class="ri-twitter-fill text-xl"></i>
                    </a>
                </div>
            </div>
        </div>
    }
}
