//! # Snipline - declarative pipeline snippet generation
//!
//! Snipline renders a declarative pipeline model (agents, stages, steps,
//! post-build actions, artifact publishing) into the literal Jenkins
//! declarative pipeline script consumed by the execution engine. Pipelines
//! are authored as data instead of hand-written script; the renderer
//! guarantees deterministic text and resolves step names against a
//! registry of known step kinds with typed parameter schemas.
//!
//! ## Quick Start
//!
//! ```rust
//! use snipline::prelude::*;
//!
//! let platform = FixedPlatform::unix();
//! let renderer = SnippetRenderer::new(BuiltinRegistry::standard(), &platform);
//!
//! let stage = Stage::new("Build", vec![Step::with_default("sh", "build")]);
//! let script = renderer.render_stage(&stage, &RenderContext::new()).unwrap();
//! assert!(script.contains("sh 'build.sh'"));
//! ```
//!
//! ## Features
//!
//! - **Typed models**: agents, steps and stages as immutable value data
//! - **Open step vocabulary**: structural validation against a pluggable
//!   step registry; semantic validation stays with the engine
//! - **Stage-role defaults**: implicit archiving and report publishing for
//!   the well-known `Build` and `Tests` stages
//! - **Dual-platform scripts**: post-action scripts branch on the node's
//!   OS family at run time
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or <https://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod logging;
pub mod pipeline;
pub mod platform;
pub mod registry;
pub mod render;
pub mod text;

// Prelude module for common imports
pub mod prelude;

// Re-export commonly used types
pub use pipeline::{
    Agent, AgentKind, AgentSentinel, ArtifactCopy, ArtifactPublishingConfig, BuildFileSpec,
    GitConfig, ImageSpec, ParamValue, RenderError, Stage, StageRole, Step, StepArgs, Validate,
    ValidationError,
};
pub use platform::{ExecutionPlatform, FixedPlatform, HostPlatform};
pub use registry::{
    BuiltinRegistry, FieldType, InvocationArgs, StepInvocation, StepKind, StepRegistry,
};
pub use render::{RenderContext, SnippetRenderer};

/// Version of the snipline crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
