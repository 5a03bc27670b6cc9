//! Branding and share constants

/// Handle appended to every composed post
pub const BRAND_HANDLE: &str = "@Fractionai_xyz";

/// Hashtags used on the card footer and the clipboard summary
pub const SHARE_HASHTAGS: &str = "#FAPS #Achievement #Crypto";

/// Product name drawn on the card footer
pub const BRAND_NAME: &str = "FRACTION AI";

/// Site shown on the card and shared as the page link on Facebook
pub const BRAND_SITE: &str = "fractionai.xyz";
pub const BRAND_URL: &str = "https://fractionai.xyz";

/// Compose endpoints
pub const X_INTENT_URL: &str = "https://twitter.com/intent/tweet";
pub const FACEBOOK_SHARER_URL: &str = "https://www.facebook.com/sharer/sharer.php";

/// Maximum characters of a post body shown before truncation
pub const POST_PREVIEW_CHARS: usize = 150;

/// Heatmap covers this many weeks ending today
pub const HEATMAP_WEEKS: usize = 12;

/// FAPS credited per heatmap intensity step
pub const FAPS_PER_INTENSITY: f64 = 12.5;
