pub mod traits;
pub mod wire;

// HTTP transport implementation
pub mod http;
