//! Destination records.
//!
//! A [`Destination`] is one entry of the catalog feed: a canonical name,
//! turn-by-turn direction steps, the marker path waypoints, and opaque
//! media references. The core never fetches or validates media URLs; they
//! pass through to the presentation layer untouched.

use crate::catalog::slug;
use crate::core::types::Waypoint;
use serde::{Deserialize, Serialize};

/// A single campus destination.
///
/// Names are unique across the catalog (uppercase canonical form) and act
/// as the primary key; the encoded slug of the name is the destination's
/// address token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    /// Canonical display name (unique, conventionally uppercase).
    pub name: String,

    /// Ordered turn-by-turn direction steps for display.
    #[serde(default)]
    pub steps: Vec<String>,

    /// Marker path in percentage-of-container coordinates.
    ///
    /// Empty means the destination has no animated path; the marker stays
    /// hidden while navigating to it.
    #[serde(default)]
    pub waypoints: Vec<Waypoint>,

    /// Map video reference (opaque URI, preferred over the image).
    #[serde(default)]
    pub map_video_url: Option<String>,

    /// Map image reference (opaque URI, fallback when no video).
    #[serde(default)]
    pub map_image_url: Option<String>,

    /// Destination photo or video reference (opaque URI, optional).
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl Destination {
    /// Address token for this destination (`slug::encode` of the name).
    pub fn token(&self) -> String {
        slug::encode(&self.name)
    }

    /// Whether the destination has an animated marker path.
    pub fn has_path(&self) -> bool {
        !self.waypoints.is_empty()
    }

    /// Whether a photo reference is present.
    pub fn has_photo(&self) -> bool {
        self.photo_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    /// Whether the photo reference points at a video.
    ///
    /// Decided by the `.mp4` suffix of the URI, case-insensitively.
    pub fn photo_is_video(&self) -> bool {
        self.photo_url
            .as_deref()
            .is_some_and(|url| url.to_lowercase().ends_with(".mp4"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_destination(name: &str) -> Destination {
        Destination {
            name: name.to_string(),
            steps: vec!["Start at the Back Gate.".to_string()],
            waypoints: vec![Waypoint::new(20.0, 90.0), Waypoint::new(75.0, 30.0)],
            map_video_url: None,
            map_image_url: None,
            photo_url: None,
        }
    }

    #[test]
    fn test_token_from_name() {
        assert_eq!(make_destination("ADMIN BUILDING").token(), "admin");
        assert_eq!(make_destination("CLINIC OFFICE").token(), "clinic");
    }

    #[test]
    fn test_has_path() {
        let mut dest = make_destination("ADMIN BUILDING");
        assert!(dest.has_path());

        dest.waypoints.clear();
        assert!(!dest.has_path());
    }

    #[test]
    fn test_photo_detection() {
        let mut dest = make_destination("ADMIN BUILDING");
        assert!(!dest.has_photo());
        assert!(!dest.photo_is_video());

        dest.photo_url = Some("https://example.com/admin.jpg".to_string());
        assert!(dest.has_photo());
        assert!(!dest.photo_is_video());

        dest.photo_url = Some("https://example.com/tour.MP4".to_string());
        assert!(dest.photo_is_video());

        // Empty string behaves like no photo at all.
        dest.photo_url = Some(String::new());
        assert!(!dest.has_photo());
    }
}
