// Composition root: HTTP routing, the GraphQL schema, session extraction,
// the response envelope and the wiring of ports to adapters.

pub mod graphql;
pub mod http;
pub mod response;
pub mod review;
pub mod session;
pub mod state;
