pub mod composer;
pub mod corpus;
pub mod error;
pub mod matcher;
pub mod model;
pub mod session;
