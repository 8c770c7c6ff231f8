//! SIMD vector math using the wide crate.
//!
//! Slices are processed in lanes of eight `f32`s; the tail that does not
//! fill a lane is handled with scalar code.

use wide::f32x8;

const LANES: usize = 8;

fn lane(chunk: &[f32]) -> f32x8 {
    let mut values = [0.0f32; LANES];
    values.copy_from_slice(chunk);
    f32x8::new(values)
}

/// SIMD-optimized dot product. Both slices must have the same length.
pub fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());

    let mut sum = f32x8::splat(0.0);
    for (x, y) in a.chunks_exact(LANES).zip(b.chunks_exact(LANES)) {
        sum = sum + lane(x) * lane(y);
    }

    let tail = a.len() - a.len() % LANES;
    let rest: f32 = a[tail..].iter().zip(&b[tail..]).map(|(x, y)| x * y).sum();

    sum.to_array().iter().sum::<f32>() + rest
}

/// SIMD-optimized Euclidean norm.
pub fn magnitude(v: &[f32]) -> f32 {
    dot_product(v, v).sqrt()
}

/// Cosine similarity in `[-1, 1]`; 0 when either vector has zero length
/// or the dimensions differ.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let norm_a = magnitude(a);
    let norm_b = magnitude(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product(a, b) / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_product_with_tail() {
        let a: Vec<f32> = (1..=10).map(|i| i as f32).collect();
        let b = vec![1.0; 10];
        assert_eq!(dot_product(&a, &b), 55.0);
    }

    #[test]
    fn test_cosine_similarity() {
        let a = [1.0, 0.0, 0.0];
        let b = [0.0, 1.0, 0.0];
        assert_eq!(cosine_similarity(&a, &a), 1.0);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert_eq!(cosine_similarity(&a, &[-1.0, 0.0, 0.0]), -1.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 0.0]), 0.0);
    }
}
