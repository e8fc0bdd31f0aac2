mod index;
mod record;
mod region_id;

pub use index::{Extent, StatisticIndex};
pub use record::{read_statistics_from_file, read_statistics_from_slice, StatRecord};
pub use region_id::RegionId;
