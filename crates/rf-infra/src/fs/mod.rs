mod file_input;

pub use file_input::FsFileInput;
