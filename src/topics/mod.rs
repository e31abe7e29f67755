// Topic clustering engine — tokenize, vectorize, merge, label.

pub mod cluster;
pub mod document;
pub mod label;
pub mod similarity;
pub mod tfidf;
pub mod tokenize;
pub mod topic;
pub mod traits;

pub use cluster::{cluster, AgglomerativeClusterer};
pub use document::Document;
pub use topic::TopicCluster;
pub use traits::TopicClusterer;
