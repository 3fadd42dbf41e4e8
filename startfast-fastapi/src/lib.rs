//! FastAPI target for the startfast scaffolding engine.
//!
//! [`FastApi`] implements [`startfast_engine::Target`]: it contributes the
//! Jinja template catalogue (embedded at compile time), the package layout
//! of a FastAPI service and the ordered generator catalogue in
//! [`generators`].
//!
//! ```ignore
//! let config = Configuration::builder("shop", "./shop").build()?;
//! let report = Orchestrator::new(&config, &FastApi)?.run(OverwritePolicy::Refuse)?;
//! ```

pub mod generators;
mod layout;
mod target;
mod templates;

pub use layout::layout;
pub use target::FastApi;
pub use templates::TEMPLATES;
