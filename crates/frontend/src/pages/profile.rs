use dioxus::logger::tracing;
use dioxus::prelude::*;

use pitch_shared::catalog::Catalog;
use pitch_shared::models::PositionDef;
use pitch_shared::selection::Selection;

use crate::components::pitch_view::PitchView;
use crate::components::selection_summary::{
    SelectionSummary, POSITIONS_INPUT_ID, PRIMARY_DISPLAY_ID, SELECTED_DISPLAY_ID,
};

#[component]
pub fn Profile(initial_positions: Option<String>) -> Element {
    let initial = initial_positions.unwrap_or_default();
    let selection = use_signal(move || Selection::parse(&initial));

    // The catalog is embedded at build time; a parse failure means a broken
    // build, so log it and render an empty pitch rather than panicking.
    let positions: Vec<PositionDef> = use_hook(|| match Catalog::load() {
        Ok(catalog) => catalog.positions,
        Err(e) => {
            tracing::error!("{e}");
            Vec::new()
        }
    });

    let initial_value = selection.read().serialized();

    rsx! {
        div { class: "app",
            div { class: "header",
                h1 { "Player Position Picker" }
            }

            div { class: "sidebar",
                SelectionSummary { initial_value }

                div { class: "panel",
                    h3 { "How to use" }
                    ul { class: "instructions",
                        li { "Click a position to select it." }
                        li { "Click a selected position to make it primary; click the primary again to demote it." }
                        li { "Right-click a position to remove it." }
                    }
                }
            }

            div { class: "pitch-panel",
                PitchView {
                    selection,
                    positions,
                    input_id: Some(POSITIONS_INPUT_ID.to_string()),
                    selected_display_id: Some(SELECTED_DISPLAY_ID.to_string()),
                    primary_display_id: Some(PRIMARY_DISPLAY_ID.to_string()),
                }
            }
        }
    }
}
