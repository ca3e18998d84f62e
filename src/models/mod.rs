pub mod whisky;

pub use whisky::*;
