pub mod naming;

pub use naming::{FILE_EXTENSION, file_stem_from_result, next_available_name};
