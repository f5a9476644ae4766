use std::collections::HashMap;

use super::Section;

/// Distance from the viewport top, in CSS pixels, of the line a section must
/// straddle to count as active.
pub const ACTIVATION_OFFSET: f64 = 100.0;

/// Vertical extent of a section relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    fn straddles_activation_line(&self) -> bool {
        self.top <= ACTIVATION_OFFSET && self.bottom >= ACTIVATION_OFFSET
    }
}

/// First section in reading order whose rect straddles the activation line,
/// or `previous` when none does. `rect_of` returns `None` for sections that
/// are not mounted.
pub fn active_section<F>(previous: Section, mut rect_of: F) -> Section
where
    F: FnMut(Section) -> Option<Rect>,
{
    Section::ALL
        .into_iter()
        .find(|&section| rect_of(section).is_some_and(|r| r.straddles_activation_line()))
        .unwrap_or(previous)
}

pub fn active_section_in(previous: Section, rects: &HashMap<Section, Rect>) -> Section {
    active_section(previous, |section| rects.get(&section).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stacked 800px sections scrolled down by `offset`.
    fn layout(offset: f64) -> HashMap<Section, Rect> {
        Section::ALL
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                let top = i as f64 * 800.0 - offset;
                (s, Rect::new(top, top + 800.0))
            })
            .collect()
    }

    #[test]
    fn test_only_about_qualifies() {
        let rects = HashMap::from([
            (Section::Home, Rect::new(-2000.0, -1200.0)),
            (Section::Portfolio, Rect::new(-1200.0, -50.0)),
            (Section::About, Rect::new(-50.0, 700.0)),
            (Section::Services, Rect::new(700.0, 1500.0)),
            (Section::Contact, Rect::new(1500.0, 2300.0)),
        ]);
        assert_eq!(active_section_in(Section::Home, &rects), Section::About);
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let rects = HashMap::from([
            (Section::Home, Rect::new(200.0, 900.0)),
            (Section::Contact, Rect::new(-900.0, 50.0)),
        ]);
        assert_eq!(active_section_in(Section::Services, &rects), Section::Services);
        assert_eq!(active_section_in(Section::Home, &HashMap::new()), Section::Home);
    }

    #[test]
    fn test_first_in_reading_order_wins() {
        let rects = HashMap::from([
            (Section::Services, Rect::new(0.0, 500.0)),
            (Section::Portfolio, Rect::new(50.0, 150.0)),
        ]);
        assert_eq!(active_section_in(Section::Contact, &rects), Section::Portfolio);
    }

    #[test]
    fn test_edges_are_inclusive() {
        let top_edge = HashMap::from([(Section::Contact, Rect::new(100.0, 900.0))]);
        assert_eq!(active_section_in(Section::Home, &top_edge), Section::Contact);

        let bottom_edge = HashMap::from([(Section::About, Rect::new(-700.0, 100.0))]);
        assert_eq!(active_section_in(Section::Home, &bottom_edge), Section::About);
    }

    #[test]
    fn test_unmounted_sections_are_skipped() {
        let mut asked = Vec::new();
        let active = active_section(Section::About, |s| {
            asked.push(s);
            match s {
                Section::Services => Some(Rect::new(10.0, 400.0)),
                _ => None,
            }
        });
        assert_eq!(active, Section::Services);
        assert_eq!(
            asked,
            vec![
                Section::Home,
                Section::Portfolio,
                Section::About,
                Section::Services
            ]
        );
    }

    #[test]
    fn test_scrolling_through_page() {
        let mut active = Section::Home;
        let mut seen = Vec::new();
        for offset in (0..4000).step_by(100) {
            active = active_section_in(active, &layout(offset as f64));
            if seen.last() != Some(&active) {
                seen.push(active);
            }
        }
        assert_eq!(seen, Section::ALL.to_vec());
    }
}
