pub mod catalog;
pub mod graph;
pub mod graph_builder;
pub mod recommender;
pub mod sources;
pub mod store;
pub mod title_search;

pub use catalog::{Catalog, LoadOptions};
pub use graph::SimilarityGraph;
pub use graph_builder::build_graph;
pub use recommender::recommend;
pub use store::{load_catalog, MovieStore};
