//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, authorization policy, data access, and the background
//! auto-responder. The backend uses Axum as the web framework and SeaORM for database
//! operations; identity, blob storage and text completion are external collaborators
//! reached over HTTP.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Policy Layer** (`policy/`) - Pure authorization, friendship and reaction rules
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token extraction and the authentication guard
//! - **Integration** (`integration/`) - Identity provider, blob store and completion clients
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, collaborators, responder queue)
//! - **Startup** (`startup`) - Initialization of database, HTTP client and collaborators
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** resolves the bearer token to the caller's identity and profile
//! 3. **Controller** converts DTOs to domain inputs, calls service
//! 4. **Service** loads the rows a decision needs and asks the policy layer
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod integration;
pub mod middleware;
pub mod model;
pub mod policy;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
