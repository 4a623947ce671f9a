//! Core components, types, and utilities for the lifeguard agent.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - The triage prompt template for LLM classification.
//! - Common types and result handling.

pub mod config;
pub mod prompts;
pub mod types;
