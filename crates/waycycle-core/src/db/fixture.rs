//! Random test-fixture generation: bulk nodes plus random relations

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, WaycycleError};

impl super::Database {
    /// Create one node per name, then `n_rel` edges between distinct random
    /// node pairs (source never equals target). A fixed `seed` makes the
    /// fixture reproducible.
    #[tracing::instrument(skip(self, names), fields(node_count = names.len(), n_rel))]
    pub fn create_nodes_and_relations(
        &self,
        names: &[String],
        n_rel: u64,
        seed: Option<u64>,
    ) -> Result<()> {
        let mut nodes = Vec::with_capacity(names.len());
        for name in names {
            nodes.push(self.create_node(name)?);
        }

        if n_rel == 0 {
            return Ok(());
        }
        if nodes.len() < 2 {
            return Err(WaycycleError::invalid_value(
                "fixture",
                "at least two nodes are required to create relations",
            ));
        }

        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        for _ in 0..n_rel {
            let idx1 = rng.gen_range(0..nodes.len());
            let mut idx2 = rng.gen_range(0..nodes.len());
            while idx2 == idx1 {
                idx2 = rng.gen_range(0..nodes.len());
            }
            self.insert_edge(nodes[idx1].id, nodes[idx2].id)?;
        }

        Ok(())
    }
}
