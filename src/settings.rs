use crate::common::Identifier;

/// Name of the entry function that programs extracted from Go use
pub const DEFAULT_ENTRY: &str = "\"main\".main";

/// Settings for a simplification run
#[derive(Debug, Clone)]
pub struct SimplifySettings {
	/// Name of the entry function
	pub entry: Identifier,
	/// Check the output guarantees after simplifying
	pub validate: bool,
	/// Keep the entry function even when it is silent
	pub keep_silent_entry: bool,
	/// Print the program after simplifying
	pub debug: bool,
}

impl SimplifySettings {
	pub fn new() -> Self {
		Self {
			entry: DEFAULT_ENTRY.into(),
			validate: true,
			keep_silent_entry: true,
			debug: false,
		}
	}
}

impl Default for SimplifySettings {
	fn default() -> Self {
		Self::new()
	}
}

pub struct SimplifySettingsBuilder {
	settings: SimplifySettings,
}

impl SimplifySettingsBuilder {
	pub fn new() -> Self {
		Self {
			settings: SimplifySettings::new(),
		}
	}

	pub fn build(self) -> SimplifySettings {
		self.settings
	}

	pub fn entry(mut self, entry: &str) -> Self {
		self.settings.entry = entry.into();
		self
	}

	pub fn validate(mut self, validate: bool) -> Self {
		self.settings.validate = validate;
		self
	}

	pub fn keep_silent_entry(mut self, keep: bool) -> Self {
		self.settings.keep_silent_entry = keep;
		self
	}

	pub fn debug(mut self, debug: bool) -> Self {
		self.settings.debug = debug;
		self
	}
}

impl Default for SimplifySettingsBuilder {
	fn default() -> Self {
		Self::new()
	}
}
