pub mod math;
pub mod random;
pub mod text;

pub use text::color::NamedColor;
pub use text::{DisplaySlot, TitlePayload};
