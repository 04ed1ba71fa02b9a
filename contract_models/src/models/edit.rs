//! Partial updates applied to models.

/// A partial update whose set fields overwrite those of its target
///
/// Implemented through `#[derive(ModelEdit)]`.
pub trait ModelEdit {
    type Target;

    /// Apply every set field to `target`, returning the applied field names
    /// in declaration order
    fn apply_to(self, target: &mut Self::Target) -> Vec<&'static str>;

    /// Whether no field is set
    fn is_empty(&self) -> bool;
}
