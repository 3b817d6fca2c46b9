pub mod compile;
pub mod doctor;
pub mod export;
pub mod list;
pub mod render;
pub mod show;
pub mod steps;
