use cricket_dashboard::{load_bundled_roster, Roster};
use log::warn;
use std::rc::Rc;
use yew::prelude::*;

/// Bundled roster, parsed once per component instance.
///
/// A roster that fails to parse leaves both dropdowns empty.
#[hook]
pub fn use_roster() -> Rc<Roster> {
    let roster = use_state(|| {
        Rc::new(load_bundled_roster().unwrap_or_else(|e| {
            warn!("{}", e);
            Roster::default()
        }))
    });
    (*roster).clone()
}

/// Ref to a `<select>` whose chosen option follows `value`.
///
/// `None` selects the placeholder option (value `""`).
#[hook]
pub fn use_synced_select(value: Option<String>) -> NodeRef {
    let select_ref = use_node_ref();
    {
        let select_ref = select_ref.clone();
        use_effect_with(value, move |value| {
            if let Some(select) = select_ref.cast::<web_sys::HtmlSelectElement>() {
                select.set_value(value.as_deref().unwrap_or(""));
            }
            || ()
        });
    }
    select_ref
}
