pub mod band_scale;
pub mod curve;
pub mod scale;
pub mod ticks;
pub mod types;

pub use band_scale::BandScale;
pub use curve::{PathCommand, cardinal_closed, circle_path, polar_point, polyline};
pub use scale::{LinearScale, extent_finite, max_finite};
pub use ticks::nice_ticks;
pub use types::{Margins, PlotArea, Viewport};
