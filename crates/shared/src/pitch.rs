/// Football pitch geometry.
///
/// The pitch is drawn portrait with the defended goal at the bottom:
/// 68m wide x 105m long (a standard full-size pitch).
/// Pitch images are 680x1050 pixels.
// World dimensions in meters
pub const PITCH_WIDTH_M: f64 = 68.0;
pub const PITCH_LENGTH_M: f64 = 105.0;

// Pitch image dimensions in pixels
pub const PITCH_WIDTH_PX: f64 = 680.0;
pub const PITCH_HEIGHT_PX: f64 = 1050.0;

pub const METERS_PER_PIXEL_X: f64 = PITCH_WIDTH_M / PITCH_WIDTH_PX;
pub const METERS_PER_PIXEL_Y: f64 = PITCH_LENGTH_M / PITCH_HEIGHT_PX;

// Marking dimensions in meters (laws-of-the-game values)
pub const PENALTY_AREA_WIDTH_M: f64 = 40.32;
pub const PENALTY_AREA_DEPTH_M: f64 = 16.5;
pub const GOAL_AREA_WIDTH_M: f64 = 18.32;
pub const GOAL_AREA_DEPTH_M: f64 = 5.5;
pub const CENTRE_CIRCLE_RADIUS_M: f64 = 9.15;
pub const PENALTY_SPOT_M: f64 = 11.0;

/// Convert pixel coordinates to meter coordinates.
pub fn px_to_meters(px_x: f64, px_y: f64) -> (f64, f64) {
    (px_x * METERS_PER_PIXEL_X, px_y * METERS_PER_PIXEL_Y)
}

/// Convert meter coordinates to pixel coordinates.
pub fn meters_to_px(m_x: f64, m_y: f64) -> (f64, f64) {
    (m_x / METERS_PER_PIXEL_X, m_y / METERS_PER_PIXEL_Y)
}

/// Convert a meter distance to pixel distance (using average scale).
pub fn meters_to_px_distance(meters: f64) -> f64 {
    let avg_scale = (PITCH_WIDTH_PX / PITCH_WIDTH_M + PITCH_HEIGHT_PX / PITCH_LENGTH_M) / 2.0;
    meters * avg_scale
}

/// Whether a meter coordinate lies on the pitch.
pub fn in_bounds(m_x: f64, m_y: f64) -> bool {
    (0.0..=PITCH_WIDTH_M).contains(&m_x) && (0.0..=PITCH_LENGTH_M).contains(&m_y)
}
