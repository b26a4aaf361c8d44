use super::tree::{BoundsTree, NodeIndex};
use crate::bounding_volume::BoundingVolume;
use crate::math::{Real, DEFAULT_EPSILON};

/// A swap between a grandchild and its uncle.
#[derive(Copy, Clone, Debug)]
struct Swap {
    child: NodeIndex,
    grand_child: NodeIndex,
    sibling: NodeIndex,
    gain: Real,
}

impl<B> BoundsTree<B> {
    /// The sum of the surface areas of every internal node.
    ///
    /// Lower is better: this approximates the expected cost of an intersection query.
    pub fn cost(&self) -> Real {
        self.nodes
            .iter()
            .filter(|(_, node)| !node.is_leaf() && node.bounds.is_valid())
            .map(|(_, node)| node.bounds.surface_area())
            .sum()
    }

    /// Applies local rotations reducing [`Self::cost`] and returns how many were applied.
    ///
    /// For each internal node, the best swap between one of its grandchildren and one of its
    /// other children is applied if it shrinks the child losing the grandchild. Leaf indices
    /// and the set of bodies are unchanged. Calling this repeatedly converges since every
    /// rotation strictly decreases the cost.
    pub fn improve_structure(&mut self) -> usize {
        let internal_nodes: Vec<_> = self
            .nodes
            .iter()
            .filter(|(_, node)| !node.is_leaf())
            .map(|(id, _)| NodeIndex(id))
            .collect();
        let mut num_rotations = 0;

        for node in internal_nodes {
            if let Some(rotation) = self.best_rotation(node) {
                log::trace!(
                    "Swapping {:?} with {:?} under {:?} (surface area gain: {}).",
                    rotation.grand_child,
                    rotation.sibling,
                    node,
                    rotation.gain
                );
                self.apply_rotation(node, rotation);
                num_rotations += 1;
            }
        }

        num_rotations
    }

    fn best_rotation(&self, node: NodeIndex) -> Option<Swap> {
        let children = self[node].children();
        let mut best: Option<Swap> = None;

        for &child in children {
            let child_node = &self[child];
            let grand_children = child_node.children();
            let old_area = child_node.bounds.surface_area();

            for &grand_child in grand_children {
                for &sibling in children {
                    if sibling == child {
                        continue;
                    }

                    let mut new_bounds = self[sibling].bounds;
                    for &other in grand_children {
                        if other != grand_child {
                            new_bounds.merge(&self[other].bounds);
                        }
                    }

                    let gain = old_area - new_bounds.surface_area();

                    if gain > DEFAULT_EPSILON * old_area.max(1.0)
                        && best.map_or(true, |b| gain > b.gain)
                    {
                        best = Some(Swap {
                            child,
                            grand_child,
                            sibling,
                            gain,
                        });
                    }
                }
            }
        }

        best
    }

    fn apply_rotation(&mut self, node: NodeIndex, rotation: Swap) {
        for c in self.children_mut(node).iter_mut() {
            if *c == rotation.sibling {
                *c = rotation.grand_child;
            }
        }

        for c in self.children_mut(rotation.child).iter_mut() {
            if *c == rotation.grand_child {
                *c = rotation.sibling;
            }
        }

        self[rotation.grand_child].parent = Some(node);
        self[rotation.sibling].parent = Some(rotation.child);

        self.recalculate_node_bounds(rotation.child);
    }
}
