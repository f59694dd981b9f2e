pub mod placement;
pub mod slot;
pub mod types;
pub mod update;

pub use placement::Placement;
pub use slot::OutlineSlot;
pub use types::*;
