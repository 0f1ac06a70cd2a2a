//! Array Looper (C9): nested iteration over a logical shape expressed as
//! ordered named dimensions, computing flat offsets into arrays that each
//! depend on a different subset of those dimensions.

use cf_common::{CoreError, CoreResult};
use std::collections::HashMap;

/// One dimension of the logical iteration shape, outermost first.
#[derive(Debug, Clone)]
pub struct DimSpec {
    pub name: String,
    pub len: usize,
}

/// Declares which of the looper's named dimensions one registered array
/// depends on, in the order the array itself is laid out (row-major,
/// outermost first). An array's own flat offset uses only these dims.
#[derive(Debug, Clone)]
pub struct ArrayBinding {
    dims: Vec<String>,
}

impl ArrayBinding {
    pub fn new(dims: Vec<String>) -> Self {
        Self { dims }
    }
}

/// Nested iteration over a shape of named dimensions, vending each
/// registered array's current flat offset as the index tuple advances.
pub struct ArrayLooper {
    shape: Vec<DimSpec>,
    dim_index: HashMap<String, usize>,
    arrays: Vec<ArrayBinding>,
    array_strides: Vec<Vec<usize>>, // per array, per shape-dim (0 if not depended on)
    index: Vec<usize>,
    exhausted: bool,
}

impl ArrayLooper {
    pub fn new(shape: Vec<DimSpec>) -> Self {
        let dim_index = shape
            .iter()
            .enumerate()
            .map(|(i, d)| (d.name.clone(), i))
            .collect();
        let exhausted = shape.iter().any(|d| d.len == 0);
        let n = shape.len();
        Self {
            shape,
            dim_index,
            arrays: Vec::new(),
            array_strides: Vec::new(),
            index: vec![0; n],
            exhausted,
        }
    }

    /// Register an array; returns its id (used with [`Self::offset`]).
    pub fn register(&mut self, binding: ArrayBinding) -> CoreResult<usize> {
        let mut dim_lens = Vec::with_capacity(binding.dims.len());
        for name in &binding.dims {
            let len = self
                .shape
                .iter()
                .find(|d| &d.name == name)
                .map(|d| d.len)
                .ok_or_else(|| CoreError::configuration(format!("unknown looper dimension {name:?}")))?;
            dim_lens.push(len);
        }
        // row-major strides over the array's own dims, outermost first
        let mut own_strides = vec![0usize; dim_lens.len()];
        let mut acc = 1usize;
        for i in (0..dim_lens.len()).rev() {
            own_strides[i] = acc;
            acc *= dim_lens[i];
        }

        let mut strides = vec![0usize; self.shape.len()];
        for (name, &stride) in binding.dims.iter().zip(&own_strides) {
            let shape_dim = self.dim_index[name];
            strides[shape_dim] = stride;
        }
        self.arrays.push(binding);
        self.array_strides.push(strides);
        Ok(self.arrays.len() - 1)
    }

    /// Flat offset of the registered array `id` at the current index tuple.
    pub fn offset(&self, id: usize) -> usize {
        self.array_strides[id]
            .iter()
            .zip(&self.index)
            .map(|(s, i)| s * i)
            .sum()
    }

    /// Current nested index tuple, one entry per shape dimension.
    pub fn index(&self) -> &[usize] {
        &self.index
    }

    /// Advance to the next index tuple (innermost dimension first).
    /// Returns `false` once the outermost dimension is exhausted.
    pub fn step(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        for d in (0..self.shape.len()).rev() {
            self.index[d] += 1;
            if self.index[d] < self.shape[d].len {
                return true;
            }
            self.index[d] = 0;
        }
        self.exhausted = true;
        false
    }

    /// The maximal suffix of shape dimensions (innermost outward) that
    /// every registered array depends on, and its element count — the
    /// block over which bulk vectorised work can be emitted without
    /// re-dereferencing any array.
    pub fn shared_inner_volume(&self) -> usize {
        let mut volume = 1usize;
        for d in (0..self.shape.len()).rev() {
            let shared = self
                .array_strides
                .iter()
                .all(|strides| strides[d] != 0 || self.shape[d].len <= 1);
            if !shared {
                break;
            }
            volume *= self.shape[d].len;
        }
        volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape() -> Vec<DimSpec> {
        vec![
            DimSpec { name: "t".into(), len: 2 },
            DimSpec { name: "y".into(), len: 3 },
            DimSpec { name: "x".into(), len: 4 },
        ]
    }

    #[test]
    fn steps_through_full_shape() {
        let mut looper = ArrayLooper::new(shape());
        let mut count = 1;
        while looper.step() {
            count += 1;
        }
        assert_eq!(count, 2 * 3 * 4);
    }

    #[test]
    fn offset_matches_manual_stride_for_dependent_array() {
        let mut looper = ArrayLooper::new(shape());
        // surface pressure: depends on (t, y, x)
        let ps = looper
            .register(ArrayBinding::new(vec!["t".into(), "y".into(), "x".into()]))
            .unwrap();
        // sigma: depends only on z-like dim not present here; use x only
        let sigma = looper
            .register(ArrayBinding::new(vec!["x".into()]))
            .unwrap();

        looper.step(); // -> (0,0,1)
        assert_eq!(looper.index(), &[0, 0, 1]);
        assert_eq!(looper.offset(ps), 1);
        assert_eq!(looper.offset(sigma), 1);

        for _ in 0..4 {
            looper.step();
        }
        // (0, 1, 1)
        assert_eq!(looper.index(), &[0, 1, 1]);
        assert_eq!(looper.offset(ps), 1 * 4 + 1);
        assert_eq!(looper.offset(sigma), 1);
    }

    #[test]
    fn rejects_unknown_dimension() {
        let mut looper = ArrayLooper::new(shape());
        assert!(looper
            .register(ArrayBinding::new(vec!["z".into()]))
            .is_err());
    }

    #[test]
    fn shared_inner_volume_is_full_shape_when_all_arrays_depend_on_everything() {
        let mut looper = ArrayLooper::new(shape());
        looper
            .register(ArrayBinding::new(vec!["t".into(), "y".into(), "x".into()]))
            .unwrap();
        assert_eq!(looper.shared_inner_volume(), 2 * 3 * 4);
    }

    #[test]
    fn shared_inner_volume_shrinks_when_an_array_skips_an_inner_dim() {
        let mut looper = ArrayLooper::new(shape());
        looper
            .register(ArrayBinding::new(vec!["t".into(), "y".into(), "x".into()]))
            .unwrap();
        looper.register(ArrayBinding::new(vec!["t".into()])).unwrap();
        assert_eq!(looper.shared_inner_volume(), 1);
    }
}
