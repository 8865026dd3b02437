pub mod app;
pub mod config;
pub mod consts;
pub mod errors;
pub mod handlers;
pub mod llm_client;
pub mod models;
pub mod prompts;
pub mod service;
pub mod session;
