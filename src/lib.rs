#[macro_use]
pub mod macros;

pub mod api;
pub mod awards;
pub mod entities;
pub mod fs_util;
pub mod report;
pub mod schema;
pub mod search;
pub mod summary;
