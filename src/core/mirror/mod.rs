pub mod comparator;
pub mod journal;
pub mod reconciler;
pub mod remover;
