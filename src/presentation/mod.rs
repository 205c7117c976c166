pub mod view_model;
pub mod wasm_api;

pub use view_model::ViewModel;
