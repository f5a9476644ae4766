mod about;
mod contact;
mod gallery;
mod hero;
mod nav;
mod services;
mod viewport;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_event_listener, use_window};

use crate::content;
use crate::state::{active_section, Action, Filter, Section, UiState};

use about::About;
use contact::ContactSection;
use gallery::Gallery;
use hero::Hero;
use nav::NavBar;
use services::Services;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-900 text-gray-100">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Isha Design Studio - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Page />
            </Routes>
        </Router>
    }
}

/// Handle to the page's UI state, shared with every section through context.
#[derive(Debug, Clone, Copy)]
pub struct PageState {
    state: RwSignal<UiState>,
}

impl PageState {
    fn new() -> Self {
        Self {
            state: RwSignal::new(UiState::new()),
        }
    }

    pub fn dispatch(&self, action: Action) {
        let next = self
            .state
            .with_untracked(|s| s.apply(&action, content::categories()));
        self.state.set(next);
    }

    /// Starts a smooth scroll towards `section` and closes the mobile menu.
    /// The highlight follows once the scroll listener sees the section.
    pub fn navigate_to(&self, section: Section) {
        viewport::scroll_to(section);
        self.dispatch(Action::NavigateTo(section));
    }

    pub fn menu_open(&self) -> bool {
        self.state.with(|s| s.menu_open)
    }

    pub fn active_section(&self) -> Section {
        self.state.with(|s| s.active_section)
    }

    pub fn active_filter(&self) -> Filter {
        self.state.with(|s| s.active_filter.clone())
    }
}

pub fn use_page_state() -> PageState {
    expect_context::<PageState>()
}

#[component]
fn Page() -> impl IntoView {
    let page = PageState::new();
    provide_context(page);

    let _ = use_event_listener(use_window(), leptos::ev::scroll, move |_| {
        let previous = page.state.with_untracked(|s| s.active_section);
        let current = active_section(previous, viewport::section_rect);
        if current != previous {
            log::debug!("active section {previous} -> {current}");
            page.dispatch(Action::SectionInView(current));
        }
    });

    view! {
        <Title text="Portfolio" />
        <div class="bg-gray-900 text-gray-100">
            <NavBar />
            <Hero />
            <Gallery />
            <About />
            <Services />
            <ContactSection />
            <Footer />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-black text-white py-12 border-t border-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <div class="text-2xl font-bold mb-4">"Portfolio"</div>
                    <p class="text-gray-400 mb-6">"Creating beautiful, functional design solutions"</p>
                    <div class="text-gray-500">"© 2024 Isha Design Studio. All rights reserved."</div>
                </div>
            </div>
        </footer>
    }
}
