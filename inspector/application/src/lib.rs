pub mod inspection_service;
pub mod ports;

pub use inspection_service::{
    InspectError, InspectOptions, InspectionService, InspectionServiceImpl,
};
pub use ports::{LoadedTable, ParquetSource, RowRenderer, SourceError};
