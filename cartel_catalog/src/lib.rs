pub mod api;
pub mod format;

#[cfg(any(feature = "client", test))]
pub mod client;

#[cfg(any(feature = "client", test))]
pub mod app_config;
