//! Front-end adapters.
//!
//! Each adapter maps one parser family's tree into the canonical
//! [`Node`](crate::core::node::Node) model. Shape differences between the
//! parsers stay inside the adapters; for source both can parse they must
//! produce identical canonical trees.

pub mod swc;
pub mod tree_sitter;

#[cfg(test)]
mod tests;

/// Callee name of translation calls.
pub const TRANSLATION_FUNCTION: &str = "t";

/// Element name of translation components.
pub const TRANSLATION_COMPONENT: &str = "Trans";

/// Attribute holding an explicit key on translation components.
pub const I18N_KEY_ATTRIBUTE: &str = "i18nKey";
