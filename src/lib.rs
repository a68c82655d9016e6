//! Auto-advancing announcement carousel: a pure slide-rotator state machine
//! plus the raylib glue to render it.

pub mod announcement;
pub mod constants;
pub mod gesture;
pub mod launcher;
pub mod renderer;
pub mod rotator;
pub mod texture_loader;
