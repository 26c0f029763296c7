use pitch_shared::pitch;

/// Pure function: convert container-relative coordinates to native
/// pitch-image pixels. Usable in unit tests (no web_sys dependency).
///
/// Only `container_w` is needed because the image renders with
/// `width:100%; height:auto`, so both axes share the same scale factor
/// (`PITCH_WIDTH_PX / container_w`).
pub fn client_to_pitch_px(
    container_x: f64,
    container_y: f64,
    container_w: f64,
) -> Option<(f64, f64)> {
    if container_w <= 0.0 {
        return None;
    }

    let scale = pitch::PITCH_WIDTH_PX / container_w;
    let img_x = (container_x * scale).clamp(0.0, pitch::PITCH_WIDTH_PX);
    let img_y = (container_y * scale).clamp(0.0, pitch::PITCH_HEIGHT_PX);

    Some((img_x, img_y))
}

/// Get container-relative click coordinates using web_sys, then convert
/// from rendered pixel space to pitch-image pixel space.
pub fn click_to_pitch_px(client_x: f64, client_y: f64, container_id: &str) -> Option<(f64, f64)> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(container_id)?;
    let rect = element.get_bounding_client_rect();

    let container_x = client_x - rect.left();
    let container_y = client_y - rect.top();

    client_to_pitch_px(container_x, container_y, rect.width())
}

/// Convert meter coordinates to pitch-image pixel coordinates.
pub fn meters_to_pitch_px(m_x: f64, m_y: f64) -> (f64, f64) {
    pitch::meters_to_px(m_x, m_y)
}
