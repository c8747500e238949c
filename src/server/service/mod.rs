//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Authorization**: Loading the rows a policy decision needs and asking `policy`
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod access;
pub mod auth;
pub mod channel;
pub mod friend;
pub mod message;
pub mod responder;
pub mod server;
pub mod storage;
pub mod user;
