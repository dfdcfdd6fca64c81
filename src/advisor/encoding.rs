//! State encoding for predictive-model input.
//!
//! Both model heads (move prediction and solved classification) consume the
//! same encoding: a `[3, N]` tensor where row i is pole i bottom-up, cells
//! holding raw disk sizes, zero-padded above the stack.

use serde::{Deserialize, Serialize};

use crate::core::{PoleId, StateSnapshot, POLE_COUNT};

/// Encoded state as a flat tensor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major).
    pub tensor: Vec<f32>,

    /// Tensor shape, `[3, disk_count]`.
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create an encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Check if the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Element at a flat index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }
}

/// Encode a snapshot for model input.
#[must_use]
pub fn encode_snapshot(snapshot: &StateSnapshot) -> EncodedState {
    let disk_count = snapshot.disk_count() as usize;
    let mut tensor = vec![0.0f32; POLE_COUNT * disk_count];

    for pole in PoleId::all() {
        let base = pole.index() * disk_count;
        for (slot, disk) in snapshot.pole_disks(pole).enumerate() {
            tensor[base + slot] = f32::from(disk.size());
        }
    }

    EncodedState::new(tensor, vec![POLE_COUNT, disk_count])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_canonical() {
        let encoded = encode_snapshot(&StateSnapshot::canonical(3));
        assert_eq!(encoded.shape, vec![3, 3]);
        assert_eq!(
            encoded.tensor,
            vec![3.0, 2.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_encode_mid_game() {
        let snapshot = StateSnapshot::from_poles(3, [vec![3], vec![2], vec![1]]);
        let encoded = encode_snapshot(&snapshot);
        assert_eq!(
            encoded.tensor,
            vec![3.0, 0.0, 0.0, 2.0, 0.0, 0.0, 1.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_encode_solved() {
        let encoded = encode_snapshot(&StateSnapshot::solved(2));
        assert_eq!(encoded.shape, vec![3, 2]);
        assert_eq!(encoded.tensor, vec![0.0, 0.0, 0.0, 0.0, 2.0, 1.0]);
    }

    #[test]
    fn test_encoded_state_accessors() {
        let encoded = EncodedState::new(vec![1.0, 2.0], vec![2]);
        assert_eq!(encoded.len(), 2);
        assert!(!encoded.is_empty());
        assert_eq!(encoded.get(1), Some(2.0));
        assert_eq!(encoded.get(2), None);
    }
}
