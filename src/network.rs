//! Network and asset constants for the lookup client.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://demon-slayer-api.onrender.com/v1";

/// Local placeholder image shown while loading, on errors, and when a record has no image.
pub const PLACEHOLDER_IMAGE: &str = "./imgs/placeholder.jpg";

/// Port the static page server binds when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 10000;

/// Character looked up automatically on initial page load.
pub const DEFAULT_CHARACTER: &str = "Tanjiro_Kamado";
