//! # Crudgen
//!
//! Generate CRUD scaffolding from an existing model definition.
//!
//! This library reads the source of a model file (`lib/<plural>.inc.php`),
//! recovers its class name and persisted field names without executing any
//! of it, and rewrites a fixed reference `contacts` example into list/entry
//! components and page templates for that model.
//!
//! ## Quick Start
//!
//! ### As a CLI Tool
//!
//! ```bash
//! # Scaffold components and templates for lib/widgets.inc.php
//! crudgen generate widgets
//!
//! # Simulate without touching disk
//! crudgen generate widgets --dry
//! ```
//!
//! ### Programmatic Usage
//!
//! ```rust,no_run
//! use crudgen::{generate_from_config, GenerateConfig};
//!
//! let config = GenerateConfig {
//!     model_name: "widgets".to_string(),
//!     destination_root: "./site".to_string(),
//!     ..Default::default()
//! };
//!
//! let documents = generate_from_config(&config)?;
//! # Ok::<(), crudgen::Error>(())
//! ```
//!
//! ## Example
//!
//! Given this model in `lib/widgets.inc.php`:
//!
//! ```php,ignore
//! class Widget {
//!   function __construct($row = array('id' => null, 'title' => null, 'slug' => null)) {
//!     $this->row = $row;
//!   }
//! }
//! ```
//!
//! `crudgen generate widgets` writes `lib/components/widgets/list.php`,
//! `lib/components/widgets/entry.php` and one page template per file in the
//! reference `templates/contacts/` directory, with every naming token
//! rewritten and the field-assignment block expanded to `title` and `slug`.

pub mod analysis;
mod error;
pub mod generators;
pub mod interface;
pub mod models;

pub use error::{Error, Result};
pub use models::*;

// Convenience re-exports for common use cases
pub use interface::config::GenerateConfig;
pub use interface::generate_from_config;
pub use interface::output::{Logger, ProgressReporter};
