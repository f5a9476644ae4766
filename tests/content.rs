use portfolio_site::content::{categories, portfolio, services};
use portfolio_site::state::{filter_items, Action, Filter, UiState};

fn ids(filter: &Filter) -> Vec<u32> {
    filter_items(portfolio(), filter)
        .iter()
        .map(|item| item.id)
        .collect()
}

#[test]
fn test_shipped_categories() {
    let names = categories()
        .iter()
        .map(Filter::as_str)
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["All", "Branding", "Print"]);
}

#[test]
fn test_all_shows_whole_table() {
    assert_eq!(ids(&Filter::All), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_print_shows_three_and_six() {
    assert_eq!(ids(&Filter::Category("Print".to_string())), vec![3, 6]);
}

#[test]
fn test_branding_preserves_table_order() {
    assert_eq!(ids(&Filter::Category("Branding".to_string())), vec![1, 2, 4, 5]);
}

#[test]
fn test_every_category_is_non_empty() {
    for filter in categories().iter().skip(1) {
        let shown = filter_items(portfolio(), filter);
        assert!(!shown.is_empty(), "{filter} has no items");
        assert!(shown.iter().all(|item| item.category == filter.as_str()));
    }
}

#[test]
fn test_filter_selection_through_reducer() {
    let state = UiState::new().apply(&Action::SelectFilter("Print".to_string()), categories());
    assert_eq!(ids(&state.active_filter), vec![3, 6]);

    let state = state.apply(&Action::SelectFilter("Web".to_string()), categories());
    assert_eq!(ids(&state.active_filter), vec![3, 6]);
}

#[test]
fn test_services_table() {
    let titles = services()
        .iter()
        .map(|s| s.title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        titles,
        vec!["Brand Identity", "Web Design", "Print Design", "UI/UX Design"]
    );
    assert!(services().iter().all(|s| s.price.starts_with("Starting at $")));
}
