use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Goalkeeper => write!(f, "Goalkeeper"),
            Role::Defender => write!(f, "Defender"),
            Role::Midfielder => write!(f, "Midfielder"),
            Role::Forward => write!(f, "Forward"),
        }
    }
}

/// One selectable marker on the pitch. `x`/`y` are meter coordinates
/// with the origin at the top-left corner, own goal at the bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionDef {
    pub code: String,
    pub display_name: String,
    pub role: Role,
    pub x: f64,
    pub y: f64,
}
