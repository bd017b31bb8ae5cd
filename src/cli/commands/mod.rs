pub mod navigate;
pub mod window;
