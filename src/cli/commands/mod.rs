pub mod compare;
pub mod list;
pub mod verify;

pub use compare::*;
pub use list::*;
pub use verify::*;
