pub mod birthday;

pub use birthday::*;
