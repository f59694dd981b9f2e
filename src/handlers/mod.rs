pub mod export;
pub mod forms;
pub mod home;
pub mod output;
pub mod wizard;
