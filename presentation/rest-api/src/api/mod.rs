pub mod catalog;
pub mod error;
pub mod health;
pub mod registration;
pub mod tags;
