mod loader;

pub use loader::load_options;
