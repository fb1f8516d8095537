//! Fixed source and output constants. The guide exposes no configuration
//! surface: one origin, one theme, one output directory.

pub const BASE_URL: &str = "https://guide.nordiskamuseet.se";
pub const THEME_PATH: &str = "/sv/1500-tal/skogen/samerna-handlar-med-dyra-palsverk/";

/// Path segment under a theme that is a sub-page, not an object.
pub const RESERVED_SEGMENT: &str = "description";

pub const OUTPUT_DIR: &str = "data";

/// Shown for objects whose page carries no images.
pub const PLACEHOLDER_THUMBNAIL: &str =
    "https://guide.nordiskamuseet.se/media/placeholder-thumbnail.webp";

/// First N discovered links become the theme's primary objects.
pub const PRIMARY_COUNT: usize = 9;

/// Politeness throttle between successive object fetches.
pub const FETCH_DELAY_MS: u64 = 200;

/// Redirect chains longer than this fail the request.
pub const MAX_REDIRECTS: usize = 10;
