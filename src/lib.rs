//! In-process warehouse management core.
//!
//! One state store ([`state::AppState`]) coordinates four entity collections
//! (orders, products, purchase orders, users) plus peripheral tracking
//! tables. All mutation flows through the services in [`services`], which
//! enforce the two inventory invariants: an order's stock deduction happens
//! exactly once, on its first move from New into Fulfillment, and purchase
//! order receiving increments stock only for putaway quantities. A
//! session-gated [`feed::OrderFeedGenerator`] produces synthetic marketplace
//! orders on a fixed period while someone is logged in.
//!
//! There is no persistence beyond the theme preference in [`theme`] and no
//! network surface: presentational collaborators call the services directly
//! and render snapshots from the state store.

pub mod auth;
pub mod config;
pub mod errors;
pub mod events;
pub mod feed;
pub mod models;
pub mod seed;
pub mod services;
pub mod state;
pub mod theme;

pub use errors::ServiceError;
pub use services::AppServices;
pub use state::AppState;
