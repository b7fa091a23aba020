pub mod corrector;
pub mod vocabulary;

pub use corrector::*;

/// Spelling capability consulted by the lexical normalizer. Implementations
/// that load external resources must do so in their constructor and fail
/// there, never per call.
pub trait SpellCorrector: Send + Sync {
    /// Whether `word` is in the dictionary. Known words are never rewritten.
    fn is_known(&self, word: &str) -> bool;

    /// Best-guess replacement for an unknown word. `None` when no candidate
    /// is close enough or the closest candidates are ambiguous.
    fn correct(&self, word: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spell_corrector_is_object_safe() {
        fn _takes_dyn(_corrector: &dyn SpellCorrector) {}
    }
}
