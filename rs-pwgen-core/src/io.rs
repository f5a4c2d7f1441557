use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reads a whole file into memory.
pub(crate) fn read_bytes<P: AsRef<Path>>(filename: P) -> io::Result<Vec<u8>> {
	fs::read(filename)
}

/// Writes `bytes` to `filename`, creating missing parent directories.
pub(crate) fn write_bytes<P: AsRef<Path>>(filename: P, bytes: &[u8]) -> io::Result<()> {
	let filename = filename.as_ref();
	if let Some(parent) = filename.parent() {
		if !parent.as_os_str().is_empty() {
			fs::create_dir_all(parent)?;
		}
	}
	fs::write(filename, bytes)
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./profiles/admin.profile"` → `"admin"`
/// - `"admin.profile"` → `"admin"`
pub(crate) fn get_filename<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub(crate) fn normalize_folder<P: AsRef<Path>>(input: P) -> PathBuf {
	let input = input.as_ref();
	if matches!(input.to_str(), Some(".") | Some("./")) {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Lists all files with a given extension in a directory.
///
/// Returns full paths, sorted so loading order does not depend on the filesystem.
pub(crate) fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			files.push(path);
		}
	}

	files.sort();
	Ok(files)
}
