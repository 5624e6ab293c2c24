pub mod collision;
pub mod integrate;
