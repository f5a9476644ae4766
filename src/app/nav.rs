use leptos::prelude::*;

use crate::state::{Action, Section};

use super::use_page_state;

#[component]
pub fn NavBar() -> impl IntoView {
    let page = use_page_state();

    view! {
        <nav class="fixed top-0 w-full bg-gray-900/95 backdrop-blur-md z-50 border-b border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-4">
                    <div class="text-2xl font-bold text-white">"Portfolio"</div>
                    <div class="hidden md:flex space-x-8">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! { <DesktopLink section /> })
                            .collect_view()}
                    </div>
                    <button
                        class="md:hidden p-2 rounded-md hover:bg-gray-800 text-gray-300 text-2xl leading-none"
                        aria-label="Toggle menu"
                        on:click=move |_| page.dispatch(Action::ToggleMenu)
                    >
                        {move || if page.menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>
                {move || {
                    page.menu_open()
                        .then(|| {
                            view! {
                                <div class="md:hidden pb-4">
                                    <div class="flex flex-col space-y-3">
                                        {Section::ALL
                                            .into_iter()
                                            .map(|section| view! { <MobileLink section /> })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>
        </nav>
    }
}

#[component]
fn DesktopLink(section: Section) -> impl IntoView {
    let page = use_page_state();
    view! {
        <button
            class=move || {
                if page.active_section() == section {
                    "transition-colors duration-200 hover:text-accent text-accent font-medium"
                } else {
                    "transition-colors duration-200 hover:text-accent text-gray-300"
                }
            }
            on:click=move |_| page.navigate_to(section)
        >
            {section.label()}
        </button>
    }
}

#[component]
fn MobileLink(section: Section) -> impl IntoView {
    let page = use_page_state();
    view! {
        <button
            class=move || {
                if page.active_section() == section {
                    "text-left py-2 px-4 rounded-md transition-colors duration-200 bg-accent/20 text-accent font-medium"
                } else {
                    "text-left py-2 px-4 rounded-md transition-colors duration-200 text-gray-300 hover:bg-gray-800"
                }
            }
            on:click=move |_| page.navigate_to(section)
        >
            {section.label()}
        </button>
    }
}
