pub mod catalog;
pub mod column;
pub mod delta;
pub mod mapping;
pub mod progress;
pub mod session;
pub mod shared;
pub mod types;
pub mod view;
