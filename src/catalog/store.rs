//! Validated destination catalog.
//!
//! [`DestinationCatalog`] wraps the ordered destination records with the
//! invariants the navigation core relies on: unique names, unique address
//! tokens, and in-range waypoints. Catalogs come from a TOML feed or from
//! the builtin campus set.

use std::path::Path;

use crate::catalog::destination::Destination;
use crate::catalog::slug;
use crate::core::types::Waypoint;
use crate::error::{GuideError, Result};
use serde::Deserialize;

/// Top-level shape of the TOML catalog feed (`[[destination]]` tables).
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    destination: Vec<Destination>,
}

/// Ordered, validated collection of destinations.
///
/// Lookup is by canonical name or by address token. Token resolution
/// re-encodes each catalog name and compares tokens; it never goes through
/// `slug::decode` (the decode direction is display-only).
#[derive(Debug, Clone)]
pub struct DestinationCatalog {
    destinations: Vec<Destination>,
}

impl DestinationCatalog {
    /// Create a catalog from records, validating the catalog invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::Catalog`] when a name is empty or duplicated,
    /// when two names encode to the same token, or when a waypoint falls
    /// outside the [0, 100] percentage range.
    pub fn new(destinations: Vec<Destination>) -> Result<Self> {
        for (i, dest) in destinations.iter().enumerate() {
            if dest.name.trim().is_empty() {
                return Err(GuideError::Catalog(format!(
                    "destination #{} has an empty name",
                    i + 1
                )));
            }

            for earlier in &destinations[..i] {
                if earlier.name == dest.name {
                    return Err(GuideError::Catalog(format!(
                        "duplicate destination name: {}",
                        dest.name
                    )));
                }
                if earlier.token() == dest.token() {
                    return Err(GuideError::Catalog(format!(
                        "destinations {} and {} share the token {}",
                        earlier.name,
                        dest.name,
                        dest.token()
                    )));
                }
            }

            if let Some(wp) = dest.waypoints.iter().find(|wp| !wp.in_bounds()) {
                return Err(GuideError::Catalog(format!(
                    "{}: waypoint ({}, {}) outside the 0..=100 percent range",
                    dest.name, wp.x, wp.y
                )));
            }
        }

        Ok(Self { destinations })
    }

    /// Parse a catalog from a TOML feed string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.destination)
    }

    /// Load a catalog from a TOML feed file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GuideError::Catalog(format!("failed to read {}: {}", path.display(), e)))?;
        let catalog = Self::from_toml_str(&content)?;
        log::info!(
            "Loaded {} destinations from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Number of destinations.
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Iterate over destinations in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Destination> {
        self.destinations.iter()
    }

    /// Look up a destination by canonical name.
    pub fn get(&self, name: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.name == name)
    }

    /// Resolve an address token to a destination.
    ///
    /// Matching re-encodes each catalog name and compares tokens, so it is
    /// immune to the asymmetry of the decode direction.
    pub fn resolve_token(&self, token: &str) -> Option<&Destination> {
        self.destinations
            .iter()
            .find(|d| slug::encode(&d.name) == token)
    }

    /// The builtin campus destination set.
    ///
    /// Static content reviewed against the catalog invariants, so no
    /// validation pass is needed here.
    pub fn builtin() -> Self {
        Self {
            destinations: builtin_destinations(),
        }
    }
}

/// Campus destinations with routes from the back gate.
fn builtin_destinations() -> Vec<Destination> {
    fn dest(
        name: &str,
        steps: &[&str],
        waypoints: &[(f32, f32)],
        map_video_url: &str,
        photo_url: &str,
    ) -> Destination {
        Destination {
            name: name.to_string(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
            waypoints: waypoints.iter().map(|&(x, y)| Waypoint::new(x, y)).collect(),
            map_video_url: Some(map_video_url.to_string()),
            map_image_url: None,
            photo_url: if photo_url.is_empty() {
                None
            } else {
                Some(photo_url.to_string())
            },
        }
    }

    vec![
        dest(
            "CCICT BUILDING",
            &[
                "Start at the Back Gate.",
                "Walk straight.",
                "Turn LEFT",
                "slight deviation to the left",
                "The CCICT BUILDING will be in your front",
            ],
            &[(20.0, 90.0), (35.0, 75.0), (50.0, 60.0), (65.0, 45.0), (75.0, 30.0)],
            "https://res.cloudinary.com/dtvbrh783/video/upload/v1751609188/CCICT_BUILDING_iyvr6l.mp4",
            "https://res.cloudinary.com/dtvbrh783/image/upload/v1751608654/ict_zg7255.jpg",
        ),
        dest(
            "ENGINEERING BUILDING",
            &[
                "Start at the Back Gate.",
                "Walk straight",
                "Turn left at the second corner near the tennis court",
                "You have arrived at the ENGINEERING BUILDING.",
            ],
            &[(10.0, 10.0), (30.0, 20.0), (50.0, 30.0), (70.0, 40.0)],
            "https://res.cloudinary.com/dtvbrh783/video/upload/v1751609245/ENGINEERING_BUILDING_qy73dm.mp4",
            "",
        ),
        dest(
            "ADMIN BUILDING",
            &[
                "Start at the Back Gate.",
                "Go straight.",
                "Turn right at the first path.",
                "After you pass the COT building and Automation building, you will see a flagpole",
                "Turn right and you will be directly ahead at the Admin building.",
            ],
            &[(31.0, 19.0), (36.0, 25.0), (32.0, 35.0), (28.0, 45.0), (27.0, 50.0)],
            "https://res.cloudinary.com/dtvbrh783/video/upload/v1751609171/ADMIN_BUILDING_gbdryl.mp4",
            "https://res.cloudinary.com/dtvbrh783/image/upload/v1751608669/adminnnnn_eexubx.jpg",
        ),
        dest(
            "SCIENCE BUILDING",
            &[
                "Start at the Back Gate.",
                "Walk straight across the open field",
                "After passing the tennis court, continue past the Kasadya Gym and the canteen.",
                "Turn left onto the paved walkway.",
                "You have arrived at the SCIENCE BUILDING.",
            ],
            &[(90.0, 90.0), (70.0, 70.0), (50.0, 50.0), (30.0, 30.0)],
            "https://res.cloudinary.com/dtvbrh783/video/upload/v1751609258/ST_BUILDING_jxvwzs.mp4",
            "https://res.cloudinary.com/dtvbrh783/image/upload/v1751608588/svience_mg2jmg.jpg",
        ),
        dest(
            "CENTENNIAL BUILDING",
            &[
                "Start at the Back Gate.",
                "Walk straight ahead.",
                "After passing the tennis court, continue past the Kasadya Gym and the canteen.",
                "Turn left at the second corner",
                "The CENTENNIAL BUILDING will be on your right.",
            ],
            &[(50.0, 90.0), (55.0, 70.0), (60.0, 50.0), (65.0, 30.0)],
            "https://res.cloudinary.com/dtvbrh783/video/upload/v1751609213/CN_BUILDING_u5d7vq.mp4",
            "https://res.cloudinary.com/dtvbrh783/image/upload/v1751608570/cn_q9wjcp.jpg",
        ),
        dest(
            "COT BUILDING",
            &[
                "Start at the Back Gate.",
                "Walk straight.",
                "Turn right at the first path.",
                "slight deviation to the right",
                "You have arrived at the COT BUILDING.",
            ],
            &[(20.0, 50.0), (25.0, 40.0), (30.0, 30.0)],
            "https://res.cloudinary.com/dtvbrh783/video/upload/v1751609220/COT_BUILDING_suh3j4.mp4",
            "",
        ),
        dest(
            "AUTOMATION BUILDING",
            &[
                "Start at the Back Gate.",
                "Take the path leading directly right.",
                "After passing the COT building.",
                "walk straight and slight deviation to the right",
                "You have arrived at the AUTOMATION BUILDING.",
            ],
            &[(70.0, 70.0), (75.0, 60.0), (80.0, 50.0)],
            "https://res.cloudinary.com/dtvbrh783/video/upload/v1751609176/AUTOMATION_BUILDING_g4vddj.mp4",
            "",
        ),
        dest(
            "CLINIC OFFICE",
            &[
                "Start at the Back Gate.",
                "Walk straight then turn right at the first pathway.",
                "Walk straight then slight deviation to the right",
                "After passing the Automation building, continue past the Admin building then turn right.",
                "The Medical Dental Clinic is a small, multi-tenant building on your right.",
                "You have arrived at the CLINIC office.",
            ],
            &[(15.0, 30.0), (20.0, 25.0), (25.0, 20.0)],
            "https://res.cloudinary.com/dtvbrh783/video/upload/v1751609206/CLINIC_OFFICE_ai0wqe.mp4",
            "",
        ),
        dest(
            "EDUCATION BUILDING",
            &[
                "Start at the Back Gate.",
                "Walk straight then turn right at the first pathway.",
                "Walk straight then slight deviation to the left",
                "After passing the Automation building, continue past the Admin building then turn right.",
                "You have arrived at the Education Building.",
            ],
            &[(30.0, 50.0), (40.0, 55.0), (50.0, 60.0)],
            "https://res.cloudinary.com/dtvbrh783/video/upload/v1751609228/EDUCATION_BUILDING_wxiopn.mp4",
            "https://res.cloudinary.com/dtvbrh783/image/upload/v1751608554/educ_jdb03e.jpg",
        ),
        dest(
            "GRADUATE BUILDING",
            &[
                "Start at the Back Gate.",
                "Walk straight then turn right at the first pathway.",
                "Walk straight then slight deviation to the left",
                "After passing the Automation building, continue past the Admin building.",
                "You have arrived at the Graduate Building.",
            ],
            &[(90.0, 25.0), (80.0, 30.0), (70.0, 35.0)],
            "https://res.cloudinary.com/dtvbrh783/video/upload/v1751609253/GRADUATE_BUILDING_kopkid.mp4",
            "https://res.cloudinary.com/dtvbrh783/image/upload/v1751608599/graduate_ajbpdo.jpg",
        ),
    ]
}
