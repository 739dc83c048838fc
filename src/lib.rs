//! # pgmodel: descriptor-driven data access for PostgreSQL
//!
//! A thin data-access adapter that turns caller-supplied model descriptions
//! into live entity mappings and exposes CRUD + filter operations against
//! them. Belongs-to relationships declared on a descriptor are wired at
//! construction time and eager-loaded on full-table fetches.
//!
//! ```no_run
//! use pgmodel::{DatabaseSettings, FieldType, ModelAdapter, ModelDescriptor};
//!
//! # async fn demo() -> pgmodel::AdapterResult<()> {
//! let city = ModelDescriptor::new("city")
//!     .with_field("cityId", FieldType::Integer)
//!     .with_field("name", FieldType::Text);
//!
//! let customer = ModelDescriptor::new("customer")
//!     .with_field("customerId", FieldType::Integer)
//!     .with_field("firstName", FieldType::Text)
//!     .with_field("cityId", FieldType::Integer)
//!     .with_belongs_to(city, "cityId");
//!
//! let adapter = ModelAdapter::connect(customer, &DatabaseSettings::from_env()).await?;
//! let customers = adapter.list().await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod config;
pub mod connection;
pub mod descriptor;
pub mod error;
pub mod naming;
pub mod query;
pub mod row;
pub mod schema;

// Re-export the adapter surface
pub use adapter::*;
pub use config::*;
pub use connection::*;
pub use descriptor::*;
pub use error::*;
pub use naming::*;
pub use query::*;
pub use row::*;
pub use schema::*;
