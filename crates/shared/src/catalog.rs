use crate::models::PositionDef;

/// Standard position markers, embedded at build time (the frontend runs
/// in wasm, so there is no filesystem to read at runtime).
const POSITIONS_JSON: &str = include_str!("../assets/positions.json");

pub struct Catalog {
    pub positions: Vec<PositionDef>,
}

impl Catalog {
    pub fn load() -> Result<Self, String> {
        let positions: Vec<PositionDef> = serde_json::from_str(POSITIONS_JSON)
            .map_err(|e| format!("Failed to parse positions.json: {}", e))?;
        Ok(Catalog { positions })
    }

    pub fn find(&self, code: &str) -> Option<&PositionDef> {
        self.positions.iter().find(|p| p.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::pitch;

    #[test]
    fn test_load() {
        let catalog = Catalog::load().unwrap();
        assert!(!catalog.positions.is_empty());
    }

    #[test]
    fn test_codes_are_unique() {
        let catalog = Catalog::load().unwrap();
        for (i, p) in catalog.positions.iter().enumerate() {
            for other in &catalog.positions[i + 1..] {
                assert_ne!(p.code, other.code, "duplicate code {}", p.code);
            }
        }
    }

    #[test]
    fn test_markers_are_on_the_pitch() {
        let catalog = Catalog::load().unwrap();
        for p in &catalog.positions {
            assert!(
                pitch::in_bounds(p.x, p.y),
                "{} is off the pitch at ({}, {})",
                p.code,
                p.x,
                p.y
            );
        }
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::load().unwrap();
        let gk = catalog.find("GK").unwrap();
        assert_eq!(gk.role, Role::Goalkeeper);
        assert_eq!(gk.display_name, "Goalkeeper");
        assert!(catalog.find("XYZ").is_none());
    }

    #[test]
    fn test_goalkeeper_defends_the_bottom_goal() {
        let catalog = Catalog::load().unwrap();
        let gk = catalog.find("GK").unwrap();
        let st = catalog.find("ST").unwrap();
        assert!(gk.y > st.y, "GK should sit deeper than the striker");
    }
}
