use std::collections::HashMap;
use std::io as std_io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::io;
use crate::model::charset::{default_sets, CharacterSet};
use crate::model::generator::{DEFAULT_LENGTH, PASSWORD_MAX_REPEATING, TOKEN_MAX_REPEATING};
use crate::validation;

/// File extension of stored profiles.
pub const PROFILE_EXTENSION: &str = "profile";

/// Stored generator configuration.
///
/// Profiles are encoded with `postcard`. They only ever hold configuration,
/// never a generated value.
///
/// # Invariants
/// A profile returned by `load` or accepted by `save` passes `validate`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Profile {
	/// Number of characters per generated string.
	pub length: usize,

	/// Maximum occurrences of a single character (0 = unbounded).
	pub max_repeating: usize,

	/// Sets to draw from, in configuration order.
	pub character_sets: Vec<CharacterSet>,
}

impl Profile {
	pub fn password() -> Self {
		Self {
			length: DEFAULT_LENGTH,
			max_repeating: PASSWORD_MAX_REPEATING,
			character_sets: default_sets(),
		}
	}

	pub fn token() -> Self {
		Self {
			length: DEFAULT_LENGTH,
			max_repeating: TOKEN_MAX_REPEATING,
			character_sets: default_sets(),
		}
	}

	pub fn alphabet_size(&self) -> usize {
		validation::alphabet_size(&self.character_sets)
	}

	/// # Errors
	/// Any configuration error reported by `validation::validate`.
	pub fn validate(&self) -> Result<()> {
		validation::validate(self.length, self.max_repeating, &self.character_sets)
	}

	/// Loads and validates a profile.
	///
	/// # Errors
	/// - `Error::Io` if the file cannot be read
	/// - `Error::Encoding` if it is not a valid profile, including stored ranges
	///   that fail the character-set checks
	/// - a configuration error if the stored values are not feasible
	pub fn load<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let bytes = io::read_bytes(filepath)?;
		let profile: Profile = postcard::from_bytes(&bytes)?;
		profile.validate()?;
		Ok(profile)
	}

	/// Validates then writes the profile, creating parent directories if needed.
	///
	/// # Errors
	/// A configuration error, or `Error::Io` / `Error::Encoding` on write failure.
	pub fn save<P: AsRef<Path>>(&self, filepath: P) -> Result<()> {
		self.validate()?;
		let bytes = postcard::to_stdvec(self)?;
		io::write_bytes(filepath, &bytes)?;
		Ok(())
	}
}

/// Loads every `.profile` file of a folder.
///
/// The map key is the file name without extension. Both `"folder"` and
/// `"folder/"` are accepted, `"."` is the working directory. Subdirectories
/// are ignored.
///
/// # Errors
/// - if the path is not a directory
/// - the first error raised by `Profile::load`
pub fn load_profiles<P: AsRef<Path>>(folder: P) -> Result<HashMap<String, Profile>> {
	let folder = io::normalize_folder(folder);
	if !folder.is_dir() {
		return Err(Error::Io(std_io::Error::new(
			std_io::ErrorKind::InvalidInput,
			format!("Expected a directory, got: {}", folder.display()),
		)));
	}

	let mut profiles = HashMap::new();
	for path in io::list_files(&folder, PROFILE_EXTENSION)? {
		let name = io::get_filename(&path)?;
		let profile = Profile::load(&path)?;
		log::debug!("loaded profile '{}' from {}", name, path.display());
		profiles.insert(name, profile);
	}

	Ok(profiles)
}
