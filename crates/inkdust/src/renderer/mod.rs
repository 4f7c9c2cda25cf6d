pub mod raster;
pub mod traits;
