//! Core domain types shared by the site.

pub mod category;
pub mod chat;
pub mod id;
pub mod language;
pub mod price;
pub mod request;

pub use category::{CategoryFilter, ProductCategory, Subcategory, SubcategoryFilter};
pub use chat::{ChatMessage, ChatRole};
pub use id::*;
pub use language::{Language, UnknownLanguage};
pub use price::{Price, PriceStyle};
pub use request::SubmitError;
