pub mod building;
pub mod request;
pub mod style;
