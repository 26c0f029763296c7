use dioxus::prelude::*;

/// Ids of the page-owned elements the widget syncs into: a hidden input
/// submitted with the surrounding form and two read-only display targets.
pub const POSITIONS_INPUT_ID: &str = "positions-input";
pub const SELECTED_DISPLAY_ID: &str = "selected-positions-display";
pub const PRIMARY_DISPLAY_ID: &str = "primary-position-display";

/// Summary panel. The display spans are deliberately not bound to state:
/// the widget writes into them (and the hidden input) by id on every
/// render, the same contract an external form would rely on.
#[component]
pub fn SelectionSummary(initial_value: String) -> Element {
    rsx! {
        div { class: "panel",
            h3 { "Positions" }
            div { class: "summary-row",
                span { class: "summary-label", "Selected: " }
                span { id: SELECTED_DISPLAY_ID, class: "summary-value", "None" }
            }
            div { class: "summary-row",
                span { class: "summary-label", "Primary: " }
                span { id: PRIMARY_DISPLAY_ID, class: "summary-value", "None" }
            }
            input {
                id: POSITIONS_INPUT_ID,
                r#type: "hidden",
                name: "positions",
                value: "{initial_value}",
            }
        }
    }
}
