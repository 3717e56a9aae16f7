//! Core of a transfer function editor.
//!
//! A transfer function editor lets a user shape opacity ramps by stacking 1-D
//! alpha curves. This crate holds the data model and the CPU raster engine:
//!
//! 1. **Model**: [`Function`] layers ([`PiecewiseLinear`], [`Tent`]) evaluated
//!    over a [`ValueRange`], plus an optional background [`Layer`] such as
//!    [`Checkers`].
//! 2. **Stack**: the [`Editor`] keeps the functions in order, answers hit-tests
//!    ([`Editor::select`]) and evaluates the combined envelope ([`Editor::eval`]).
//! 3. **Raster**: [`Editor::rasterize`] composites everything into a packed
//!    RGBA8 [`Texture`] that a UI layer uploads or an exporter encodes.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded**: layers are shared through `Rc`; hosts that touch an
//!   editor from several threads must wrap it themselves.
//! - **Deterministic**: rasterizing unchanged state yields byte-identical output,
//!   which [`RasterCache`] relies on.
//! - **Plain float math**: straight `[0, 1]` channels quantized to 8 bits, no
//!   color management.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod editor;
mod foundation;
mod layer;
mod raster;

pub use config::RenderConfig;
pub use editor::cache::RasterCache;
pub use editor::stack::{Editor, OUTLINE_COLOR};
pub use foundation::color::{over, over_packed, pack, to_byte, to_float, unpack};
pub use foundation::core::{ControlPoint, Point, Rgb, Rgba, ValueRange};
pub use foundation::error::{TfeError, TfeResult};
pub use layer::checkers::Checkers;
pub use layer::piecewise::PiecewiseLinear;
pub use layer::tent::Tent;
pub use layer::{FUNCTION_FILL, Function, FunctionRef, Layer, LayerRef, rasterize_area};
pub use raster::texture::Texture;
