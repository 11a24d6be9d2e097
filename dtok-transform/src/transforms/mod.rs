//! Built-in transform implementations

pub mod font_weight;
pub mod kebab;
pub mod letter_spacing;
pub mod size_px;

pub use font_weight::FontWeightValue;
pub use kebab::KebabName;
pub use letter_spacing::LetterSpacingEm;
pub use size_px::SizePx;
