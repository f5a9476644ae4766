use leptos::prelude::*;

use crate::content::{self, PortfolioItem};
use crate::state::{filter_items, Action, Filter, Section};

use super::use_page_state;

#[component]
pub fn Gallery() -> impl IntoView {
    view! {
        <section id=Section::Portfolio.id() class="py-20 bg-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold text-white mb-4">"My Work"</h2>
                    <p class="text-xl text-gray-300 max-w-2xl mx-auto">
                        "A collection of my best projects across various design disciplines"
                    </p>
                </div>
                <div class="flex flex-wrap justify-center gap-4 mb-12">
                    {content::categories()
                        .iter()
                        .map(|filter| view! { <FilterButton filter /> })
                        .collect_view()}
                </div>
                <Grid />
            </div>
        </section>
    }
}

#[component]
fn FilterButton(filter: &'static Filter) -> impl IntoView {
    let page = use_page_state();
    view! {
        <button
            class=move || {
                if page.active_filter() == *filter {
                    "px-6 py-3 rounded-full font-medium transition-all duration-200 bg-accent text-white shadow-lg"
                } else {
                    "px-6 py-3 rounded-full font-medium transition-all duration-200 bg-gray-700 text-gray-300 hover:bg-gray-600"
                }
            }
            on:click=move |_| page.dispatch(Action::SelectFilter(filter.to_string()))
        >
            {filter.as_str()}
        </button>
    }
}

#[component]
fn Grid() -> impl IntoView {
    let page = use_page_state();
    view! {
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
            {move || {
                let filter = page.active_filter();
                filter_items(content::portfolio(), &filter)
                    .into_iter()
                    .map(|item| view! { <Card item /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn Card(item: &'static PortfolioItem) -> impl IntoView {
    view! {
        <div class="group cursor-pointer">
            <div class="relative overflow-hidden rounded-2xl shadow-lg hover:shadow-2xl transition-all duration-300 transform hover:-translate-y-2 border border-gray-700">
                <img
                    src=item.image.as_str()
                    alt=item.title.as_str()
                    class="w-full h-64 object-cover group-hover:scale-110 transition-transform duration-300"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/80 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    <div class="absolute bottom-6 left-6 right-6 text-white">
                        <h3 class="text-xl font-bold mb-2">{item.title.as_str()}</h3>
                        <p class="text-sm opacity-90 mb-2">{item.description.as_str()}</p>
                        <div class="flex items-center justify-between">
                            <span class="text-xs bg-accent px-2 py-1 rounded">
                                {item.category.as_str()}
                            </span>
                            <span class="text-xs opacity-75">{item.client.as_str()}</span>
                            <span aria-hidden="true">"↗"</span>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
