//! statlab-viz - Chart specifications for statlab
//!
//! Turns a `BinomialModel` into presentation artifacts without drawing
//! anything itself:
//!
//! - **Figures**: Plotly-compatible JSON for the theoretical stem plot and the
//!   empirical bar chart
//! - **ProbabilityTable**: the PMF as a transposed, horizontally scrolling HTML
//!   table
//! - **BinomialReport**: all of the above as one JSON document or a
//!   standalone HTML page
//!
//! Styling comes from an explicit [`Palette`] passed through
//! [`FigureOptions`]; there is no global colour state.

pub mod axis;
pub mod charts;
pub mod error;
pub mod figure;
pub mod format;
pub mod palette;
pub mod report;
pub mod table;

pub use axis::*;
pub use charts::*;
pub use error::*;
pub use figure::*;
pub use format::*;
pub use palette::*;
pub use report::*;
pub use table::*;
