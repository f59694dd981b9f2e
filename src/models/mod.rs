pub mod outline;
pub mod presentation;
pub mod steps;
pub mod stories;
