//! Moodlog Inference
//!
//! Client side of the remote inference service.
//!
//! - [`Transport`] posts JSON to a ranked list of endpoints, retrying a
//!   loading model once and falling back across endpoints
//! - [`RemoteSentimentClassifier`] normalizes classification responses into
//!   a [`moodlog_core::SentimentResult`]
//! - [`RemoteGenerator`] requests free text from generation models

pub mod classifier;
pub mod config;
pub mod generation;
pub mod transport;

pub use classifier::{Classifier, RemoteSentimentClassifier};
pub use config::{GenerationConfig, InferenceConfig};
pub use generation::{GenerationParams, RemoteGenerator, TextGenerator};
pub use transport::{Endpoint, Transport};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{Classifier, RemoteSentimentClassifier};
    pub use crate::generation::{GenerationParams, RemoteGenerator, TextGenerator};
    pub use crate::transport::Transport;
}
