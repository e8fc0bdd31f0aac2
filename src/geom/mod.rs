mod bbox;
mod locate;
mod path;
mod proj;

use bbox::RegionEnvelope;

pub use locate::RegionLocator;
pub use path::{multilinestring_to_path, multipolygon_to_path, project_multipolygon};
pub use proj::{FitExtent, Identity, Projection, ProjectionKind};
