//! Moodlog Reflection
//!
//! Turns a classified note into a short reflection and advice.
//!
//! Everything here is keyword driven and deterministic except the optional
//! remote generation attempt in [`MessageComposer`], which always has a
//! local template to fall back on.

pub mod composer;
pub mod signals;
pub mod templates;
pub mod tips;
pub mod tone;

pub use composer::MessageComposer;
pub use signals::{TopicExtractor, HEALTH_TOPIC};
pub use templates::LocalTemplates;
pub use tips::select_tips;
pub use tone::ToneSelector;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::composer::MessageComposer;
    pub use crate::signals::TopicExtractor;
    pub use crate::tips::select_tips;
    pub use crate::tone::ToneSelector;
}
