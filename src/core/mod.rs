pub mod loader;
pub mod pipeline;
pub mod resolver;
pub mod window;
