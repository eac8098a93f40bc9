use rand::Rng;


const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of fresh node and edge identifiers
/// Injected into the graph so id assignment can be made reproducible
pub trait IdGenerator {
    fn node_id(&mut self) -> String;
    fn edge_id(&mut self) -> String;
}


/// Monotonic counters: n1, n2, ... for nodes and e1, e2, ... for edges
#[derive(Clone, Debug, Default)]
pub struct SequentialIds {
    nodes: u64,
    edges: u64,
}

impl IdGenerator for SequentialIds {
    fn node_id(&mut self) -> String {
        self.nodes += 1;
        format!("n{}", self.nodes)
    }

    fn edge_id(&mut self) -> String {
        self.edges += 1;
        format!("e{}", self.edges)
    }
}


/// Short random base-36 identifiers
/// Collisions are possible, the graph retries until it gets an unused one
#[derive(Clone, Debug)]
pub struct RandomIds {
    len: usize,
}

impl RandomIds {
    pub fn new(len: usize) -> Self {
        Self { len: len.max(1) }
    }

    fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..self.len)
            .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
            .collect()
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new(7)
    }
}

impl IdGenerator for RandomIds {
    fn node_id(&mut self) -> String {
        self.generate()
    }

    fn edge_id(&mut self) -> String {
        self.generate()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.node_id(), "n1");
        assert_eq!(ids.node_id(), "n2");
        assert_eq!(ids.edge_id(), "e1");
        assert_eq!(ids.node_id(), "n3");
    }

    #[test]
    fn test_random_ids_shape() {
        let mut ids = RandomIds::default();
        for _ in 0..50 {
            let id = ids.node_id();
            assert_eq!(id.len(), 7);
            assert!(id.bytes().all(|b| BASE36.contains(&b)));
        }
    }
}
