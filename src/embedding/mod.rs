//! Embedding provider seam and vector similarity
//!
//! The scoring engine never owns an embedding client; it receives an
//! `Arc<dyn EmbeddingProvider>` at construction so backends can be swapped
//! and tests can inject doubles.

pub mod openai;

use crate::error::{Result, ScreenerError};
use async_trait::async_trait;

/// A capability that turns text into a fixed-length vector.
///
/// Contract: `Ok(None)` for blank input, `Err(Provider)` when the backend is
/// unavailable. The engine never fabricates a similarity score on failure.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Option<Vec<f32>>>;
}

/// Caps text at the provider's input ceiling, respecting char boundaries.
pub fn truncate_for_embedding(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Cosine similarity between two vectors. Zero-norm vectors give 0.0; a
/// dimension mismatch is an error since it means two different providers got
/// mixed up.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(ScreenerError::AnalysisFailed(format!(
            "Embedding dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product / (norm_a * norm_b))
    }
}
