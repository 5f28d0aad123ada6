//! Pure, platform-agnostic building blocks: records, sample data, theme and errors.

pub mod catalog;
pub mod error;
pub mod format;
pub mod money;
pub mod records;
pub mod sample;
pub mod theme;

pub use catalog::Catalog;
pub use error::{DataError, MoneyError, RoutingError, ThemeError};
pub use money::Money;
pub use records::*;
pub use theme::{Rgb, Theme, ThemeColors};
