pub mod common;
mod macros;
pub mod output;
pub mod parse;
pub mod passes;
pub mod program;
pub mod settings;

pub use settings::{SimplifySettings, SimplifySettingsBuilder, DEFAULT_ENTRY};

use log::debug;

use crate::program::Program;

/// Simplify a program in place, removing silent functions, functions unreachable
/// from the entry and the call sites and choices left vacuous by those removals
pub fn simplify_program(program: &mut Program, settings: &SimplifySettings) -> anyhow::Result<()> {
	let before = program.len();
	passes::run_passes(program, settings)?;
	debug!(
		"Simplified program from {before} to {} functions",
		program.len()
	);

	Ok(())
}

