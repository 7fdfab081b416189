/// Sesame Studio Library
///
/// Shared modules for the pose editor GUI

pub mod config_loader;
pub mod joints;
pub mod codegen;
pub mod code_buffer;
pub mod session;
