//! Infrastructure Layer
//!
//! This module contains all adapters (implementations) for the ports defined
//! in the domain and application layers. Following hexagonal architecture:
//!
//! - **Driven Adapters (Outbound)**
//!   - `persistence/`: In-memory inventory store and seed loader
//!   - `security/`: Password hashing
//!
//! - **Driver Adapters (Inbound)**
//!   - `http/`: REST API controllers
//!
//! - **Wiring**
//!   - `config/`: Dependency injection container

pub mod config;
pub mod http;
pub mod persistence;
pub mod security;
