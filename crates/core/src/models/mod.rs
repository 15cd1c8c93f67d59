//! Content records bundled with the site.
//!
//! Records are immutable once loaded. Localized records carry optional `_ru`
//! variants; the English field is always the fallback.

mod blog;
mod location;
mod product;

pub use blog::BlogPost;
pub use location::{Coordinates, Location, LocationKind};
pub use product::{Product, SpecRow, StrapMaterial, StrapProduct, ToolProduct};
