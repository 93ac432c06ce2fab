pub mod health;
pub mod statcast;
pub mod teams;
