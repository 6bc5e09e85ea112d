pub mod debounce;
pub mod session;
