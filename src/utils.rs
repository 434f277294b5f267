use cricket_dashboard::{Selection, StatCategory};
use std::rc::Rc;

/// Labels for a category's stat dropdown, in display order.
pub fn stat_labels(category: StatCategory) -> Rc<Vec<String>> {
    Rc::new(
        category
            .stats()
            .iter()
            .map(|s| s.label().to_string())
            .collect(),
    )
}

/// Values the player and team dropdowns should show for `selection`.
/// `None` means the placeholder option.
pub fn dropdown_values(selection: &Selection) -> (Option<String>, Option<String>) {
    match selection {
        Selection::Nothing => (None, None),
        Selection::Player(name) => (Some(name.clone()), None),
        Selection::Team(team) => (None, Some(team.clone())),
    }
}
