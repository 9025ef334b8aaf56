//! Windows implementations: registry settings, GDI display settings and the
//! WinRT simple orientation sensor.

mod console;
mod display;
mod registry;
mod sensor;

pub use console::*;
pub use display::*;
pub use registry::*;
pub use sensor::*;
