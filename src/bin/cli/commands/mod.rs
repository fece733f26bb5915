pub mod brand;
pub mod inquiry;
pub mod item;
pub mod photo;
pub mod project;
pub mod tag;
