pub mod config;
pub mod console;
pub mod engine;
pub mod i18n;
pub mod retry;
pub mod validator;
