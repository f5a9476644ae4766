use leptos::{html, prelude::*};

use crate::contact::{ContactRequest, ProjectType};
use crate::state::Section;

static INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-gray-800 border border-gray-600 focus:border-accent focus:outline-none transition-colors duration-200 text-white placeholder-gray-400";

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="py-20 bg-gray-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold text-white mb-4">"Let's Work Together"</h2>
                    <p class="text-xl text-gray-300 max-w-2xl mx-auto">
                        "Ready to bring your vision to life? Let's discuss your next project"
                    </p>
                </div>
                <div class="grid lg:grid-cols-2 gap-16">
                    <ContactInfo />
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let rows = [
        ("✉", "Email", "ishasharma180104@gmail.com"),
        ("☎", "Phone", "+91 7645934801"),
        ("📍", "Location", "Patna, Bihar"),
    ];
    view! {
        <div class="space-y-8">
            <div class="space-y-6">
                {rows
                    .into_iter()
                    .map(|(icon, label, value)| {
                        view! {
                            <div class="flex items-center gap-4">
                                <span class="text-accent text-2xl">{icon}</span>
                                <div>
                                    <div class="font-medium text-white">{label}</div>
                                    <div class="text-gray-300">{value}</div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="bg-gray-800 rounded-2xl p-8 border border-gray-700">
                <h3 class="text-xl font-bold mb-4 text-white">"Quick Response Time"</h3>
                <p class="text-gray-300 mb-4">
                    "I typically respond to all inquiries within 24 hours. For urgent projects, feel free to call directly."
                </p>
                <div class="text-cream font-medium">"Average response time: 4 hours"</div>
            </div>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let first_ref = NodeRef::<html::Input>::new();
    let last_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let project_ref = NodeRef::<html::Select>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    view! {
        <form
            class="space-y-6"
            on:submit=move |ev| {
                ev.prevent_default();
                let (Some(first), Some(last), Some(email), Some(project), Some(message)) = (
                    first_ref.get_untracked(),
                    last_ref.get_untracked(),
                    email_ref.get_untracked(),
                    project_ref.get_untracked(),
                    message_ref.get_untracked(),
                ) else {
                    log::warn!("contact form is not mounted");
                    return;
                };
                let req = ContactRequest::from_fields(
                    &first.value(),
                    &last.value(),
                    &email.value(),
                    &project.value(),
                    &message.value(),
                );
                match serde_json::to_string(&req) {
                    Ok(json) => log::info!("contact form has no relay, dropping {json}"),
                    Err(e) => log::error!("couldn't serialize contact request: {e}"),
                }
            }
        >
            <div class="grid md:grid-cols-2 gap-6">
                <div>
                    <label class="block text-sm font-medium mb-2 text-gray-300">"First Name"</label>
                    <input node_ref=first_ref type="text" class=INPUT_CLASS placeholder="John" />
                </div>
                <div>
                    <label class="block text-sm font-medium mb-2 text-gray-300">"Last Name"</label>
                    <input node_ref=last_ref type="text" class=INPUT_CLASS placeholder="Doe" />
                </div>
            </div>
            <div>
                <label class="block text-sm font-medium mb-2 text-gray-300">"Email"</label>
                <input
                    node_ref=email_ref
                    type="email"
                    class=INPUT_CLASS
                    placeholder="john@example.com"
                />
            </div>
            <div>
                <label class="block text-sm font-medium mb-2 text-gray-300">"Project Type"</label>
                <select node_ref=project_ref class=INPUT_CLASS>
                    {ProjectType::ALL
                        .into_iter()
                        .map(|p| view! { <option>{p.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div>
                <label class="block text-sm font-medium mb-2 text-gray-300">"Message"</label>
                <textarea
                    node_ref=message_ref
                    rows="5"
                    class=format!("{INPUT_CLASS} resize-none")
                    placeholder="Tell me about your project..."
                ></textarea>
            </div>
            <button
                type="submit"
                class="w-full bg-accent text-white py-4 rounded-lg font-medium hover:bg-accent/90 transition-colors duration-200"
            >
                "Send Message"
            </button>
        </form>
    }
}
