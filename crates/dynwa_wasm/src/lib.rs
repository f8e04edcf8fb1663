//! WASM bridge exposing the Dynamic-Wa material laws to JavaScript.
//!
//! A [`WasmDynamicWa`] is built once from a configuration object and then
//! evaluated many times; configuration errors surface from the constructor.

mod law;

pub use law::WasmDynamicWa;
