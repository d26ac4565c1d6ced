pub mod ai;
pub mod persona;
pub mod safety;
