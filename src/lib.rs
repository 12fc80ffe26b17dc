pub mod contact;
pub mod model;
pub mod motion;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod backend;
