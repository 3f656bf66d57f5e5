//! Role argument specification tooling: loading and rendering.
//!
//! This crate holds everything `rolespec-ctl` needs besides I/O and argument
//! handling. It parses a role's `meta/argument_specs.yml` into an ordered
//! [`ParameterSchema`](argument_specs::ParameterSchema) and renders that schema
//! into text.
//!
//! # Modules
//!
//! - [`argument_specs`]: Schema model and the loader for `meta/argument_specs.yml`
//! - [`render`]: Defaults document, README parameter section, and compact listing renderers

pub mod argument_specs;
pub mod render;

pub use argument_specs::{
    load_role, parse_options_str, LoadError, ParameterSchema, ParameterSpec, ParameterType,
    RoleArgumentSpecs, RoleIdentity, TypeKind,
    yaml11_bool,
};
pub use render::{render_defaults, render_listing, render_readme, ListingOptions};
