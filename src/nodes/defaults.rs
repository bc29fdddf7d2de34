//! Default property values for nodes
//!
//! This module centralizes default values and ranges for the node library so
//! nodes that share a kind of parameter agree on it.

/// Ranges for pixel dimensions and offsets
pub struct ImageDefaults;

impl ImageDefaults {
    /// Largest width, height or offset accepted by transform nodes
    pub const DIMENSION_MAX: i32 = 10_000;
    pub const DIMENSION_DEFAULT: i32 = 100;

    // Generated shapes
    pub const SHAPE_DIMENSION_MAX: i32 = 4_500;
    pub const SHAPE_DIMENSION_DEFAULT: i32 = 100;

    // Composite offsets
    pub const OFFSET_DEFAULT: i32 = 10;
}

/// Ranges for percentage and color adjustment parameters
pub struct ColorDefaults;

impl ColorDefaults {
    pub const PERCENT_MIN: i32 = 0;
    pub const PERCENT_MAX: i32 = 100;
    pub const PERCENT_DEFAULT: i32 = 100;

    // Color effects
    pub const HUE_MAX: i32 = 255;
    pub const FACTOR_MAX: i32 = 250;
    pub const FACTOR_DEFAULT: i32 = 100;

    // Chroma key
    pub const THRESHOLD_DEFAULT: i32 = 10;
}

/// Ranges for filter parameters
pub struct FilterDefaults;

impl FilterDefaults {
    pub const BLUR_RADIUS_MAX: i32 = 64;
    pub const BLUR_RADIUS_DEFAULT: i32 = 4;
}
