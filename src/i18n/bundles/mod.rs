//! Per-locale message bundles.
//!
//! One file per locale. Each bundle must define every entry; the compiler
//! enforces this because `MessageBundle` has no defaults.

mod ar;
mod bg;
mod en;
mod hi;
mod hu;
mod id;
mod pl;
mod pt;
mod ru;
mod sw;
mod tr;
mod vi;

pub use ar::AR;
pub use bg::BG;
pub use en::EN;
pub use hi::HI;
pub use hu::HU;
pub use id::ID;
pub use pl::PL;
pub use pt::PT;
pub use ru::RU;
pub use sw::SW;
pub use tr::TR;
pub use vi::VI;
