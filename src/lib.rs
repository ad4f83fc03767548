#[macro_use]
pub mod macros;

pub mod api;
pub mod book;
pub mod credentials;
pub mod movie;
pub mod output;
pub mod subject_trait;
pub mod text;
