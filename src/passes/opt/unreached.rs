use itertools::Itertools;
use log::debug;

use crate::passes::analysis::reachability::reachable_functions;
use crate::passes::{Pass, PassData, ProgramPass};

/// Removes every function that cannot be reached from the entry.
/// Does nothing when the program has no entry
pub struct RemoveUnreachedPass;

impl Pass for RemoveUnreachedPass {
	fn get_name(&self) -> &'static str {
		"remove_unreached"
	}
}

impl ProgramPass for RemoveUnreachedPass {
	fn run_pass(&mut self, data: &mut PassData) -> anyhow::Result<()> {
		let Some(entry) = &data.entry else {
			return Ok(());
		};
		if !data.program.has_function(entry) {
			debug!("Entry {entry} was removed, skipping reachability");
			return Ok(());
		}

		let reached = reachable_functions(data.program, entry);
		let removed = data
			.program
			.retain_functions(|func| reached.contains(&func.name));
		if !removed.is_empty() {
			debug!("Removed unreached functions: {}", removed.iter().join(", "));
		}

		Ok(())
	}
}
