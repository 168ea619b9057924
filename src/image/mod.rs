pub mod gray;
pub mod io;
pub mod raster;

pub use self::gray::GrayImageU8;
pub use self::io::{load_rgb_image, save_gray_image, write_json_file, RgbImageU8};
pub use self::raster::RasterU8;
