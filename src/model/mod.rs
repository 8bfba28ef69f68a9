pub mod course;
pub mod database;
pub mod database_write;
pub mod score;
pub mod types;
pub mod utils;

pub use course::*;
pub use database::*;
pub use database_write::*;
pub use score::*;
pub use types::*;
pub use utils::*;
