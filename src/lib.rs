//! Schedula - administração do service desk pela linha de comando

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod notifier;
pub mod pages;
pub mod prompts;
pub mod render;
