pub mod grayscale;
pub mod median;
pub mod threshold;

pub use self::grayscale::rgb_to_gray;
pub use self::median::median_filter;
pub use self::threshold::{
    adaptive_threshold, box_mean, invert_in_place, BACKGROUND_LEVEL, EDGE_LEVEL,
};
