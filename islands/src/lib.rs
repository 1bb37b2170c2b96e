pub mod error;
pub mod grid;
pub mod unionfind;
pub mod labeler;
pub mod parse;

pub use error::IslandsError;
pub use grid::{Grid, PaddedGrid};
pub use labeler::{affected_land_count, count_islands, ComponentLabeler};
pub use parse::GridFormat;
