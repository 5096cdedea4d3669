pub mod convert;
pub mod error;
pub mod formats;

pub use convert::{convert_dataset, convert_file};
pub use error::ConvertError;
