use leptos::prelude::*;

use crate::content;
use crate::state::Section;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id=Section::Services.id() class="py-20 bg-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold text-white mb-4">"Services"</h2>
                    <p class="text-xl text-gray-300 max-w-2xl mx-auto">
                        "Comprehensive design solutions tailored to your business needs"
                    </p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {content::services()
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="bg-gray-700 rounded-2xl p-8 shadow-lg hover:shadow-2xl transition-all duration-300 transform hover:-translate-y-2 border border-gray-600 hover:border-gray-500">
                                    <div class="text-4xl mb-4">{service.icon.as_str()}</div>
                                    <h3 class="text-xl font-bold text-white mb-3">
                                        {service.title.as_str()}
                                    </h3>
                                    <p class="text-gray-300 mb-4 leading-relaxed">
                                        {service.description.as_str()}
                                    </p>
                                    <div class="text-accent font-semibold">{service.price.as_str()}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
