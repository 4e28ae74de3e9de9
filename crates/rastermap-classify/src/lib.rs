//! Rastermap Classify - Pixel map construction and classification
//!
//! This crate walks a decoded image into a coordinate-to-channels map and
//! partitions that map into "black" and "colored" pixel subsets:
//!
//! - **Image map** ([`map`]): full-grid coordinate -> channel tuple mapping
//! - **Partition** ([`partition`]): exact-black predicate and the
//!   disjoint-and-covering black/colored split

pub mod error;
pub mod map;
pub mod partition;

pub use error::{ClassifyError, ClassifyResult};
pub use map::{Coord, ImageMap, build_image_map};
pub use partition::{Partition, black_pixels, colored_pixels, is_black, partition};
