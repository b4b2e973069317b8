// src/utils/io.rs

/// Get the application data directory
pub fn get_app_data_dir() -> Option<std::path::PathBuf> {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "interior", "interior") {
        Some(proj_dirs.data_dir().to_path_buf())
    } else {
        log::warn!("Could not determine data directory");
        None
    }
}
