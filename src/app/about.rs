use leptos::prelude::*;

use crate::state::Section;

static SKILLS: [&str; 8] = [
    "Adobe Creative Suite",
    "Figma & Sketch",
    "Brand Strategy",
    "Web Design",
    "Print Design",
    "Typography",
    "Illustration",
    "UI/UX Design",
];

static ABOUT_IMAGE: &str =
    "https://images.pexels.com/photos/3184338/pexels-photo-3184338.jpeg?auto=compress&cs=tinysrgb&w=800";

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-20 bg-gray-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div class="space-y-6">
                        <h2 class="text-4xl font-bold text-white">"About Me"</h2>
                        <div class="space-y-4 text-gray-300 leading-relaxed">
                            <p>
                                "Hi, I'm Isha, a passionate graphic designer. With over a year of experience in the industry, I've had the privilege of working with startups, established brands, and everything in between."
                            </p>
                            <p>
                                "My design philosophy centers around creating meaningful connections between brands and their audiences through thoughtful, strategic design. I believe great design isn't just about looking good, it's about solving problems and telling compelling stories."
                            </p>
                            <p>
                                "When I'm not designing, you can find me exploring local coffee shops, hiking the beautiful mountain trails, or experimenting with new typography trends."
                            </p>
                        </div>
                        <div class="space-y-4">
                            <h3 class="text-xl font-semibold text-white">"Skills & Expertise"</h3>
                            <div class="grid grid-cols-2 gap-4">
                                {SKILLS
                                    .iter()
                                    .map(|skill| {
                                        view! {
                                            <div class="flex items-center gap-2">
                                                <div class="w-2 h-2 bg-accent rounded-full"></div>
                                                <span class="text-gray-300">{*skill}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <button class="flex items-center gap-2 bg-gray-700 text-white px-6 py-3 rounded-lg hover:bg-gray-600 transition-colors duration-200 border border-gray-600">
                            <span aria-hidden="true">"⬇"</span>
                            "Download Resume"
                        </button>
                    </div>
                    <div class="relative">
                        <div class="aspect-square rounded-2xl overflow-hidden shadow-2xl border border-gray-700">
                            <img
                                src=ABOUT_IMAGE
                                alt="Designer workspace"
                                class="w-full h-full object-cover"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
