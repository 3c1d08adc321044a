//! Shared types, error model, and configuration for specgloss.
//!
//! This crate is the foundation depended on by all other specgloss crates.
//! It provides:
//! - [`SpecglossError`], the unified error type
//! - Domain types ([`RequirementId`]) and the fixed document markers
//! - Configuration ([`AppConfig`], [`AnnotateConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AnnotateConfig, AnnotateSection, AppConfig, DefaultsConfig, config_dir, config_file_path,
    init_config, load_config, load_config_from,
};
pub use error::{Result, SpecglossError};
pub use types::{
    NORMATIVE_KEYWORD, RATIONALE_MARKER, REQUIREMENT_HEADER_PREFIX, RequirementId,
    SECTION_HEADING_PREFIX, is_section_boundary,
};
