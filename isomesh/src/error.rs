//! Error types for isomesh.

use isomesh_core::IsoCoreError;
use thiserror::Error;

/// Errors that can occur while configuring or running an extraction.
#[derive(Error, Debug)]
pub enum IsoMeshError {
    /// Failure reported by the core algorithms (bounds, table validation).
    #[error(transparent)]
    Core(#[from] IsoCoreError),

    /// Invalid configuration.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },

    /// Voxel data has the wrong number of samples.
    #[error("voxel data has {got} samples, expected {expected}")]
    SampleCountMismatch {
        /// Samples implied by the extent.
        expected: usize,
        /// Samples provided.
        got: usize,
    },

    /// The worker pool could not be created.
    #[error("failed to build thread pool: {message}")]
    ThreadPool {
        /// Description from the pool builder.
        message: String,
    },

    /// I/O error while exporting a mesh.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IsoMeshError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Result type alias for isomesh operations.
pub type Result<T> = std::result::Result<T, IsoMeshError>;
