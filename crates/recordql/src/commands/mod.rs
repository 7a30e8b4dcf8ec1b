pub mod helpers;
pub mod objects;
pub mod queries;
