//! Graph representation and construction module

pub mod builder;
pub mod route;

pub use route::RouteGraph;
