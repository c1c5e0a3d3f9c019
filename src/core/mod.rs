pub mod builder;
pub mod graph;
pub mod parser;
pub mod roots;
pub mod serialize;
pub mod types;
