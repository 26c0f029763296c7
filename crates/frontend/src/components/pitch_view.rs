use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use pitch_shared::models::PositionDef;
use pitch_shared::pitch;
use pitch_shared::selection::Selection;

use crate::coords;

const PITCH_CONTAINER_ID: &str = "pitch-position-container";

/// Hit radius (in pitch-image pixels) for marker clicks.
const MARKER_HIT_RADIUS: f64 = 38.0;

/// Reference container width (desktop pitch panel) used to normalize marker sizes.
const REFERENCE_WIDTH: f64 = 680.0;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Get the bounding client rect of the pitch container element.
fn container_rect() -> Option<web_sys::DomRect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(PITCH_CONTAINER_ID)?;
    Some(element.get_bounding_client_rect())
}

/// Write `value` into the input with the given id; no-op when the element
/// is missing or isn't an input.
fn set_input_value(id: &str, value: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };
    if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        input.set_value(value);
    }
}

/// Replace the text content of the element with the given id; no-op when absent.
fn set_display_text(id: &str, text: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(id) {
        element.set_text_content(Some(text));
    }
}

/// Mirror the selection into its bound page targets: the form field gets the
/// primary-first serialized value, the two displays get the human-readable
/// summaries. Every target is optional; the surrounding page may omit any.
pub fn sync_bound_targets(
    selection: &Selection,
    input_id: Option<&str>,
    selected_display_id: Option<&str>,
    primary_display_id: Option<&str>,
) {
    if let Some(id) = input_id {
        set_input_value(id, &selection.serialized());
    }
    if let Some(id) = selected_display_id {
        set_display_text(id, &selection.selected_summary());
    }
    if let Some(id) = primary_display_id {
        set_display_text(id, &selection.primary_summary());
    }
}

// ---------------------------------------------------------------------------
// Marker hit-testing
// ---------------------------------------------------------------------------

/// Find the code of the nearest marker within `threshold` (Euclidean
/// distance in image pixels).
fn find_nearest<'a>(
    positions: &'a [PositionDef],
    click: (f64, f64),
    threshold: f64,
) -> Option<&'a str> {
    let mut best_code = None;
    let mut best_dist = threshold;
    for p in positions {
        let (px, py) = coords::meters_to_pitch_px(p.x, p.y);
        let dx = px - click.0;
        let dy = py - click.1;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist < best_dist {
            best_dist = dist;
            best_code = Some(p.code.as_str());
        }
    }
    best_code
}

// ---------------------------------------------------------------------------
// SVG builder
// ---------------------------------------------------------------------------

/// CSS classes for a marker group: always `position-marker`, plus
/// `selected` for a selected code and additionally `primary` for the one
/// primary code.
fn marker_classes(selection: &Selection, code: &str) -> String {
    let mut classes = String::from("position-marker");
    if selection.is_selected(code) {
        classes.push_str(" selected");
        if selection.is_primary(code) {
            classes.push_str(" primary");
        }
    }
    classes
}

/// Build the full SVG content as a string for reliable rendering.
/// Positions are in native pitch-image pixel space (680x1050).
fn build_svg_content(positions: &[PositionDef], selection: &Selection, container_w: f64) -> String {
    let mut svg = String::with_capacity(8192);

    // Scale factor: keeps markers, strokes, and labels a consistent physical
    // size on screen regardless of container width. On a 680 px desktop
    // panel the boost is 1.0; on a 430 px phone it's ~1.6x.
    let s = (REFERENCE_WIDTH / container_w).max(1.0);

    build_pitch_lines(&mut svg, s);
    build_markers(&mut svg, positions, selection, s);

    svg
}

fn build_pitch_lines(svg: &mut String, s: f64) {
    let sw = 2.0 * s;
    let w = pitch::PITCH_WIDTH_PX;
    let h = pitch::PITCH_HEIGHT_PX;
    let stroke = "rgba(255,255,255,0.7)";

    // Touchlines and goal lines
    svg.push_str(&format!(
        r#"<rect x="{sw}" y="{sw}" width="{}" height="{}" fill="none" stroke="{stroke}" stroke-width="{sw}"/>"#,
        w - 2.0 * sw,
        h - 2.0 * sw
    ));

    // Halfway line, centre circle, centre spot
    let mid_y = h / 2.0;
    let circle_r = pitch::meters_to_px_distance(pitch::CENTRE_CIRCLE_RADIUS_M);
    svg.push_str(&format!(
        r#"<line x1="0" y1="{mid_y}" x2="{w}" y2="{mid_y}" stroke="{stroke}" stroke-width="{sw}"/>"#
    ));
    svg.push_str(&format!(
        r#"<circle cx="{}" cy="{mid_y}" r="{circle_r}" fill="none" stroke="{stroke}" stroke-width="{sw}"/>"#,
        w / 2.0
    ));
    svg.push_str(&format!(
        r#"<circle cx="{}" cy="{mid_y}" r="{}" fill="{stroke}"/>"#,
        w / 2.0,
        3.0 * s
    ));

    // Penalty and goal areas at both ends, penalty spots
    build_box(svg, pitch::PENALTY_AREA_WIDTH_M, pitch::PENALTY_AREA_DEPTH_M, sw, stroke);
    build_box(svg, pitch::GOAL_AREA_WIDTH_M, pitch::GOAL_AREA_DEPTH_M, sw, stroke);
    let spot_y = pitch::meters_to_px_distance(pitch::PENALTY_SPOT_M);
    svg.push_str(&format!(
        r#"<circle cx="{}" cy="{spot_y}" r="{}" fill="{stroke}"/>"#,
        w / 2.0,
        3.0 * s
    ));
    svg.push_str(&format!(
        r#"<circle cx="{}" cy="{}" r="{}" fill="{stroke}"/>"#,
        w / 2.0,
        h - spot_y,
        3.0 * s
    ));
}

/// Emit a centered box of the given meter dimensions at both goal lines.
fn build_box(svg: &mut String, width_m: f64, depth_m: f64, sw: f64, stroke: &str) {
    let w = pitch::PITCH_WIDTH_PX;
    let h = pitch::PITCH_HEIGHT_PX;
    let box_w = pitch::meters_to_px_distance(width_m);
    let box_h = pitch::meters_to_px_distance(depth_m);
    let x = (w - box_w) / 2.0;
    svg.push_str(&format!(
        r#"<rect x="{x}" y="0" width="{box_w}" height="{box_h}" fill="none" stroke="{stroke}" stroke-width="{sw}"/>"#
    ));
    svg.push_str(&format!(
        r#"<rect x="{x}" y="{}" width="{box_w}" height="{box_h}" fill="none" stroke="{stroke}" stroke-width="{sw}"/>"#,
        h - box_h
    ));
}

fn build_markers(svg: &mut String, positions: &[PositionDef], selection: &Selection, s: f64) {
    for p in positions {
        let (cx, cy) = coords::meters_to_pitch_px(p.x, p.y);
        let classes = marker_classes(selection, &p.code);
        let r = 17.0 * s;
        let sw = 2.5 * s;
        let fs = 13.0 * s;
        // Vertically center the code label inside the circle
        let ty = cy + 4.5 * s;
        let code = &p.code;
        let name = &p.display_name;
        svg.push_str(&format!(
            r##"<g class="{classes}" data-position="{code}" role="img"><title>{name}</title>"##
        ));
        if selection.is_primary(code) {
            build_primary_ring(svg, cx, cy, s);
        }
        svg.push_str(&format!(
            r##"<circle cx="{cx}" cy="{cy}" r="{r}" stroke-width="{sw}"/>"##
        ));
        svg.push_str(&format!(
            r##"<text x="{cx}" y="{ty}" font-size="{fs}" font-family="sans-serif" font-weight="700" text-anchor="middle">{code}</text>"##
        ));
        svg.push_str("</g>");
    }
}

/// Emit an animated dashed ring around the primary marker.
fn build_primary_ring(svg: &mut String, cx: f64, cy: f64, s: f64) {
    let r = 26.0 * s;
    let sw = 2.5 * s;
    let da1 = 6.0 * s;
    let da2 = 4.0 * s;
    svg.push_str(&format!(
        r##"<circle class="primary-ring" cx="{cx}" cy="{cy}" r="{r}" fill="none" stroke-width="{sw}" stroke-dasharray="{da1} {da2}" opacity="0.9"><animate attributeName="opacity" values="0.5;1;0.5" dur="1.2s" repeatCount="indefinite"/></circle>"##
    ));
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// The position-selector widget.
///
/// Left-click a marker to select it (or to promote/demote an existing
/// selection); right-click to deselect. Every state change re-renders the
/// pitch and mirrors the selection into the optional bound page targets.
#[component]
pub fn PitchView(
    selection: Signal<Selection>,
    positions: Vec<PositionDef>,
    input_id: Option<String>,
    selected_display_id: Option<String>,
    primary_display_id: Option<String>,
) -> Element {
    let mut selection = selection;

    // Memoize SVG generation; recomputes only when the selection changes.
    let svg_positions = positions.clone();
    let svg_html = use_memo(move || {
        let sel = selection.read();
        let cw = container_rect().map(|r| r.width()).unwrap_or(REFERENCE_WIDTH);
        let svg_content = build_svg_content(&svg_positions, &sel, cw);
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" preserveAspectRatio="none" style="position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;">{}</svg>"#,
            pitch::PITCH_WIDTH_PX,
            pitch::PITCH_HEIGHT_PX,
            svg_content
        )
    });

    // Mirror state into the bound form field and summary displays after
    // every change. Missing targets are silently skipped.
    let effect_input_id = input_id.clone();
    let effect_selected_id = selected_display_id.clone();
    let effect_primary_id = primary_display_id.clone();
    use_effect(move || {
        let sel = selection.read();
        sync_bound_targets(
            &sel,
            effect_input_id.as_deref(),
            effect_selected_id.as_deref(),
            effect_primary_id.as_deref(),
        );
    });

    let click_positions = positions.clone();
    let menu_positions = positions;

    rsx! {
        div {
            id: PITCH_CONTAINER_ID,
            class: "pitch-container",

            onclick: move |evt: Event<MouseData>| {
                let client = evt.client_coordinates();
                if let Some((img_x, img_y)) =
                    coords::click_to_pitch_px(client.x, client.y, PITCH_CONTAINER_ID)
                {
                    if let Some(code) =
                        find_nearest(&click_positions, (img_x, img_y), MARKER_HIT_RADIUS)
                    {
                        let code = code.to_string();
                        selection.write().toggle(&code);
                    }
                }
            },

            oncontextmenu: move |evt: Event<MouseData>| {
                evt.prevent_default();
                let client = evt.client_coordinates();
                if let Some((img_x, img_y)) =
                    coords::click_to_pitch_px(client.x, client.y, PITCH_CONTAINER_ID)
                {
                    if let Some(code) =
                        find_nearest(&menu_positions, (img_x, img_y), MARKER_HIT_RADIUS)
                    {
                        let code = code.to_string();
                        selection.write().remove(&code);
                    }
                }
            },

            div {
                class: "pitch-surface",
                dangerous_inner_html: "{svg_html}",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitch_shared::models::Role;

    fn def(code: &str, x: f64, y: f64) -> PositionDef {
        PositionDef {
            code: code.to_string(),
            display_name: code.to_string(),
            role: Role::Midfielder,
            x,
            y,
        }
    }

    // --- marker_classes tests ---

    #[test]
    fn test_marker_classes_unselected() {
        let sel = Selection::new();
        assert_eq!(marker_classes(&sel, "CM"), "position-marker");
    }

    #[test]
    fn test_marker_classes_selected_and_primary() {
        let sel = Selection::parse("CM,ST");
        assert_eq!(marker_classes(&sel, "CM"), "position-marker selected primary");
        assert_eq!(marker_classes(&sel, "ST"), "position-marker selected");
        assert_eq!(marker_classes(&sel, "GK"), "position-marker");
    }

    #[test]
    fn test_marker_classes_after_demote() {
        let mut sel = Selection::parse("CM");
        sel.toggle("CM"); // demote: selected but no primary
        assert_eq!(marker_classes(&sel, "CM"), "position-marker selected");
    }

    // --- find_nearest tests ---

    #[test]
    fn test_find_nearest_within_threshold() {
        // 10 px/m: CM sits at (340, 560), ST at (340, 100)
        let positions = vec![def("CM", 34.0, 56.0), def("ST", 34.0, 10.0)];
        assert_eq!(find_nearest(&positions, (342.0, 563.0), 38.0), Some("CM"));
        assert_eq!(find_nearest(&positions, (338.0, 98.0), 38.0), Some("ST"));
    }

    #[test]
    fn test_find_nearest_outside_threshold() {
        let positions = vec![def("CM", 34.0, 56.0)];
        assert_eq!(find_nearest(&positions, (100.0, 100.0), 38.0), None);
    }

    #[test]
    fn test_find_nearest_picks_closest() {
        let positions = vec![def("CM", 34.0, 56.0), def("CAM", 34.0, 40.0)];
        // (340, 460): 100 px from CM, 60 px from CAM
        assert_eq!(find_nearest(&positions, (340.0, 460.0), 120.0), Some("CAM"));
    }

    // --- SVG builder tests ---

    #[test]
    fn test_markers_carry_selection_classes() {
        let positions = vec![def("CM", 34.0, 56.0), def("ST", 34.0, 10.0)];
        let sel = Selection::parse("ST");
        let mut svg = String::new();
        build_markers(&mut svg, &positions, &sel, 1.0);
        assert!(svg.contains(r#"class="position-marker selected primary" data-position="ST""#));
        assert!(svg.contains(r#"class="position-marker" data-position="CM""#));
    }

    #[test]
    fn test_primary_ring_only_on_primary() {
        let positions = vec![def("CM", 34.0, 56.0), def("ST", 34.0, 10.0)];
        let mut sel = Selection::parse("ST,CM");
        let mut svg = String::new();
        build_markers(&mut svg, &positions, &sel, 1.0);
        assert_eq!(svg.matches("primary-ring").count(), 1);

        // Demoting the primary drops the ring entirely
        sel.toggle("ST");
        let mut svg = String::new();
        build_markers(&mut svg, &positions, &sel, 1.0);
        assert_eq!(svg.matches("primary-ring").count(), 0);
    }

    #[test]
    fn test_svg_idempotent_for_unchanged_state() {
        let positions = vec![def("CM", 34.0, 56.0), def("ST", 34.0, 10.0)];
        let sel = Selection::parse("CM,ST");
        let first = build_svg_content(&positions, &sel, 680.0);
        let second = build_svg_content(&positions, &sel, 680.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_pitch_lines_present() {
        let mut svg = String::new();
        build_pitch_lines(&mut svg, 1.0);
        // Outline + two penalty areas + two goal areas
        assert_eq!(svg.matches("<rect").count(), 5);
        // Halfway line
        assert!(svg.contains("<line"));
        // Centre circle/spot and two penalty spots
        assert!(svg.matches("<circle").count() >= 4);
    }

    #[test]
    fn test_marker_scale_boost_below_reference_width() {
        let positions = vec![def("CM", 34.0, 56.0)];
        let sel = Selection::new();
        let narrow = build_svg_content(&positions, &sel, 340.0);
        let wide = build_svg_content(&positions, &sel, 1360.0);
        // Narrow containers boost marker radius; wide ones stay at 1.0
        assert!(narrow.contains(r#"r="34""#));
        assert!(wide.contains(r#"r="17""#));
    }
}
