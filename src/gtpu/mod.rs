pub mod end_marker;
pub mod header;
pub mod types;

pub use end_marker::{append_end_marker, EndMarker, EndMarkerEncoder};
pub use header::{GtpuError, GtpuHeader};
pub use types::{MessageType, GTPU_PORT, GTPU_VERSION};
