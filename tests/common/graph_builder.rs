//! Floor plan builders for integration tests

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use wayfind::{
    load_snapshot, Edge, FloorPlan, GraphDocument, GraphSnapshot, InMemorySource, JsonFileSource,
    Node, RoomCatalog,
};

/// Configuration for a random test graph
#[derive(Debug, Clone)]
pub struct RandomGraphConfig {
    pub seed: u64,
    pub nodes: usize,
    pub edges: usize,
    /// Inclusive upper bound for integer edge weights
    pub max_weight: u32,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            seed: 7,
            nodes: 24,
            edges: 30,
            max_weight: 20,
        }
    }
}

impl RandomGraphConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_size(mut self, nodes: usize, edges: usize) -> Self {
        self.nodes = nodes;
        self.edges = edges;
        self
    }
}

/// Random multigraph with integer weights
///
/// Weights are whole numbers so sums compare exactly. Sparse settings leave
/// several components; parallel edges and zero weights occur naturally.
pub fn random_document(config: &RandomGraphConfig) -> GraphDocument {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let nodes: Vec<Node> = (0..config.nodes)
        .map(|i| Node::new(format!("n{i}"), (i % 3) as i32 + 1))
        .collect();

    let edges = (0..config.edges)
        .map(|_| {
            let a = rng.gen_range(0..config.nodes);
            let mut b = rng.gen_range(0..config.nodes);
            if a == b {
                b = (b + 1) % config.nodes;
            }
            let weight = rng.gen_range(0..=config.max_weight) as f64;
            Edge::new(format!("n{a}"), format!("n{b}"), weight)
        })
        .collect();

    GraphDocument { nodes, edges }
}

pub fn random_plan(config: &RandomGraphConfig) -> FloorPlan {
    FloorPlan::from_document(random_document(config)).expect("random graph is consistent")
}

/// A -5- B -3- C -2- D with a direct A -10- C, plus isolated E
pub fn abcde_plan() -> FloorPlan {
    FloorPlan::build(
        ["A", "B", "C", "D", "E"]
            .into_iter()
            .map(|id| Node::new(id, 1))
            .collect(),
        vec![
            Edge::new("A", "B", 5.0),
            Edge::new("B", "C", 3.0),
            Edge::new("A", "C", 10.0),
            Edge::new("C", "D", 2.0),
        ],
    )
    .expect("fixture graph is consistent")
}

pub fn abcde_snapshot() -> GraphSnapshot {
    let source = InMemorySource::new(abcde_plan().to_document(), RoomCatalog::default());
    load_snapshot(&source).expect("fixture snapshot loads")
}

/// The sample building shipped in `data/`
pub fn sample_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn sample_snapshot() -> GraphSnapshot {
    load_snapshot(&JsonFileSource::new(sample_data_dir())).expect("sample data loads")
}
