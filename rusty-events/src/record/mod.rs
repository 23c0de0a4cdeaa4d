pub mod id;
pub use id::*;
pub mod binding;
pub use binding::*;
pub mod event;
pub use event::*;
