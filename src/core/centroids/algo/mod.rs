//! 구조 그래프 알고리즘 (centroid 순위 계산용)
//!
//! 모든 함수는 `Graph::to_petgraph` 가 만든 무방향 그래프를 받고
//! 노드 인덱스 순서의 점수 벡터를 돌려준다.

pub mod betweenness;
pub mod closeness;
pub mod eigenvector;
pub mod pagerank;
pub mod kcore;
pub mod greedy_modularity;

pub use betweenness::{betweenness_centrality, BetweennessConfig};
pub use closeness::closeness_centrality;
pub use eigenvector::{eigenvector_centrality, EigenvectorConfig};
pub use pagerank::{pagerank, PageRankConfig};
pub use kcore::core_numbers;
pub use greedy_modularity::greedy_modularity_communities;
