//! pubstyle
//!
//! Publication-ready chart styling for [`plotters`]. A [`StyleRequest`]
//! describing the target document (page width, columns, aspect ratio, fonts,
//! dpi) is turned into an immutable [`StyleProfile`] that figures are built
//! from, so charts drop into a paper at exactly the right size.
//!
//! ### Features
//! - Figure size from document geometry: `columns` figures tile the page width
//! - Typography, figure chrome, ticks, grid and legend defaults in one value
//! - Corporate color palette (10 hues × 13 tints)
//! - SVG rendering and export of styled figures
//!
//! ### Example
//! ```no_run
//! use pubstyle::{StyleConfigurator, StyleRequest};
//! use pubstyle::models::{AspectRatio, FontFamily};
//! use pubstyle::viz::Series;
//!
//! let mut session = StyleConfigurator::new();
//! session.apply(&StyleRequest {
//!     font_family: FontFamily::Serif,
//!     columns_per_page: 2,
//!     page_width_length: 15.99,
//!     aspect_ratio: AspectRatio::new(1.1, 1.0),
//!     mark_for_export: true,
//!     export_name: "fig1".into(),
//!     ..StyleRequest::default()
//! })?;
//! session
//!     .figure()
//!     .add(Series::line([(0.0, 0.0), (1.0, 1.0)]).label("Line"))
//!     .x_label("x");
//! session.export_latest("export")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod configurator;
pub mod error;
pub mod export;
pub mod geometry;
pub mod models;
pub mod palette;
pub mod profile;
pub mod viz;

pub use configurator::StyleConfigurator;
pub use error::StyleError;
pub use export::ExportSignal;
pub use models::StyleRequest;
pub use profile::StyleProfile;
