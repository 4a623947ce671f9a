//! Service integrations for external APIs and clients.
//!
//! This module contains implementations for the collaborators the workflow
//! depends on:
//! - Profile stores (e.g., SurrealDB)
//! - LLM services (e.g., OpenAI)
//! - Transactional mail services
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod llm;
pub mod mail;
pub mod profile;
