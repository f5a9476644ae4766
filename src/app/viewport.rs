use leptos::prelude::document;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::state::{Rect, Section};

/// Current viewport rect of the section element, `None` if it isn't mounted.
pub fn section_rect(section: Section) -> Option<Rect> {
    let el = document().get_element_by_id(section.id())?;
    let rect = el.get_bounding_client_rect();
    Some(Rect::new(rect.top(), rect.bottom()))
}

/// Smooth-scrolls the section's top to the viewport top. Does not wait for
/// the animation.
pub fn scroll_to(section: Section) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        log::debug!("no element for section {section}");
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}
