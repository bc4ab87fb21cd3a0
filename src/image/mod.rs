pub mod io;
pub mod rgba;
pub mod traits;

pub use self::rgba::{pixel_index, RgbaImage, RgbaImageMut};
pub use self::traits::{ImageView, ImageViewMut};
