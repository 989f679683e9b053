pub mod creation;
pub mod dimension;
pub mod query;
pub mod reference;
pub mod select;
pub mod shaping;
