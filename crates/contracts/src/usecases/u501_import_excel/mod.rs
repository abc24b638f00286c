pub mod response;

pub use response::ImportExcelResponse;
