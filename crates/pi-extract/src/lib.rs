pub mod error;
pub mod scan;
pub mod svg;

pub use error::{ExtractError, Result};
pub use scan::{
    DEFAULT_CONCURRENCY, RecordMode, ScanOptions, ScanReport, ScanStats, list_svg_files,
    scan_icon_dir, write_base_corpus,
};
pub use svg::{EXPECTED_HEIGHT, EXPECTED_VIEW_BOX, EXPECTED_WIDTH, SvgRejection, extract_icon};
