pub mod alfred;
pub mod error;
pub mod paths;
pub mod registry;
pub mod request;
pub mod text;
pub mod url;
