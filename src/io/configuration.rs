//! Solver constants and runtime configuration defaults

// A perfect white pixel sums to 765 across its RGB channels
/// Minimum RGB channel sum for a pixel to count as open
pub const WHITE_THRESHOLD: u32 = 715;
/// Largest meaningful threshold (three saturated channels)
pub const MAX_CHANNEL_SUM: u32 = 765;

// Renderer colors
/// RGB color painted on nodes and on the solution path
pub const NODE_COLOR: [u8; 3] = [244, 67, 54];
/// RGB color painted on the corridor pixels of each edge
pub const CONNECTION_COLOR: [u8; 3] = [129, 212, 250];

// Output settings
/// Suffix added to the rendered graph filename
pub const CONNECTIONS_SUFFIX: &str = "_connections";
/// Suffix added to the rendered path filename
pub const PATH_SUFFIX: &str = "_path";
/// Extension of every rendered image
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
