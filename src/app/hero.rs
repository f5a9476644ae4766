use leptos::prelude::*;

use crate::state::Section;

use super::use_page_state;

static HERO_IMAGE: &str =
    "https://images.pexels.com/photos/3184295/pexels-photo-3184295.jpeg?auto=compress&cs=tinysrgb&w=800";

#[component]
pub fn Hero() -> impl IntoView {
    let page = use_page_state();

    view! {
        <section
            id=Section::Home.id()
            class="pt-20 min-h-screen flex items-center bg-gradient-to-br from-gray-900 via-gray-800 to-gray-900"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="space-y-8">
                        <div class="space-y-4">
                            <h1 class="text-5xl md:text-6xl font-bold text-white leading-tight">
                                "Creative" <span class="text-accent">" Design"</span> <br />
                                "Solutions"
                            </h1>
                            <p class="text-xl text-gray-300 leading-relaxed">
                                "I'm a passionate graphic designer with experience of creating compelling visual stories that help brands connect with their audiences."
                            </p>
                        </div>
                        <div class="flex flex-col sm:flex-row gap-4">
                            <button
                                class="bg-accent text-white px-8 py-4 rounded-lg font-medium hover:bg-accent/90 transition-colors duration-200 flex items-center justify-center gap-2"
                                on:click=move |_| page.navigate_to(Section::Portfolio)
                            >
                                "View My Work"
                                <span aria-hidden="true">"⌄"</span>
                            </button>
                            <button
                                class="border-2 border-gray-600 text-gray-300 px-8 py-4 rounded-lg font-medium hover:bg-gray-700 hover:text-white hover:border-gray-500 transition-all duration-200"
                                on:click=move |_| page.navigate_to(Section::Contact)
                            >
                                "Get In Touch"
                            </button>
                        </div>
                    </div>
                    <div class="relative">
                        <div class="aspect-square rounded-2xl overflow-hidden shadow-2xl border border-gray-700">
                            <img
                                src=HERO_IMAGE
                                alt="Creative workspace"
                                class="w-full h-full object-cover"
                            />
                        </div>
                        <div class="absolute -bottom-6 -right-6 bg-accent p-6 rounded-2xl shadow-lg border border-gray-600">
                            <div class="flex items-center gap-2">
                                <span class="text-yellow-400">"★"</span>
                                <span class="font-bold text-white">"4.9/5 Rating"</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
