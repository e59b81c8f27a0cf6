pub mod departments;
mod request;
pub mod templates;

pub use request::RequestDrafter;
