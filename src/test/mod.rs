
pub use test_helper::{with_input_dir, write_file, write_gz_file};
