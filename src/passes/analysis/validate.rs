use anyhow::bail;
use rustc_hash::FxHashSet;

use crate::common::block::Block;
use crate::common::function::Function;
use crate::common::Identifier;
use crate::passes::{Pass, PassData, ProgramPass};
use crate::settings::SimplifySettings;

/// Checks that a simplified program has no empty statement sequences
/// and no calls to functions that are not defined
pub struct ValidatePass;

impl Pass for ValidatePass {
	fn get_name(&self) -> &'static str {
		"validate"
	}

	fn should_run(&self, settings: &SimplifySettings) -> bool {
		settings.validate
	}
}

impl ProgramPass for ValidatePass {
	fn run_pass(&mut self, data: &mut PassData) -> anyhow::Result<()> {
		let defined = data.program.function_names();
		for func in data.program.functions() {
			validate_function(func, &defined)?;
		}

		Ok(())
	}
}

fn validate_function(func: &Function, defined: &FxHashSet<Identifier>) -> anyhow::Result<()> {
	let mut empty = 0;
	let mut dangling = None;
	func.block.for_each_block(&mut |block: &Block| {
		if block.contents.is_empty() {
			empty += 1;
		}
	});
	func.block.for_each_call(&mut |call| {
		if dangling.is_none() && !defined.contains(&call.function) {
			dangling = Some(call.function.clone());
		}
	});

	if empty > 0 {
		bail!("Function {} has {empty} empty statement sequences", func.name);
	}
	if let Some(target) = dangling {
		bail!("Function {} references undefined function {target}", func.name);
	}

	Ok(())
}
