use std::path::PathBuf;

// Directory holding locally persisted storefront state, the stand-in for the
// browser origin's local storage.
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bookstore")
}
