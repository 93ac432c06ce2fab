pub mod aggregate;
pub mod frame;

pub use frame::Frame;
