use itertools::Itertools;
use log::debug;

use crate::common::Identifier;
use crate::passes::analysis::silent::silent_functions;
use crate::passes::{Pass, PassData, ProgramPass};
use crate::program::Program;

/// Which silent functions are removed from the definition table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SilentPolicy {
	RemoveAll,
	/// Remove every silent function but this one
	RemoveAllExcept(Identifier),
}

/// Removes the definitions of functions that are equivalent to tau.
/// Calls to them are left dangling for cleanup to remove
pub struct RemoveSilentPass {
	policy: SilentPolicy,
}

impl RemoveSilentPass {
	pub fn new(policy: SilentPolicy) -> Self {
		Self { policy }
	}
}

impl Pass for RemoveSilentPass {
	fn get_name(&self) -> &'static str {
		"remove_silent"
	}
}

impl ProgramPass for RemoveSilentPass {
	fn run_pass(&mut self, data: &mut PassData) -> anyhow::Result<()> {
		remove_silent_functions(data.program, &self.policy);

		Ok(())
	}
}

/// Remove silent functions according to the policy, returning the removed names
pub fn remove_silent_functions(program: &mut Program, policy: &SilentPolicy) -> Vec<Identifier> {
	let mut silent = silent_functions(program);
	if let SilentPolicy::RemoveAllExcept(keep) = policy {
		silent.remove(keep);
	}
	let removed = program.retain_functions(|func| !silent.contains(&func.name));
	if !removed.is_empty() {
		debug!("Removed silent functions: {}", removed.iter().join(", "));
	}

	removed
}
