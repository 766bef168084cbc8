use log::debug;
use rustc_hash::FxHashSet;

use crate::common::block::Block;
use crate::common::stmt::Statement;
use crate::common::Identifier;
use crate::passes::{Pass, PassData, ProgramPass};

/// Removes calls and spawns of functions that are no longer defined, and
/// removes branches and selects where every alternative has become tau
pub struct CleanupPass;

impl Pass for CleanupPass {
	fn get_name(&self) -> &'static str {
		"cleanup"
	}
}

impl ProgramPass for CleanupPass {
	fn run_pass(&mut self, data: &mut PassData) -> anyhow::Result<()> {
		let defined = data.program.function_names();
		let mut removed = 0;
		for func in data.program.functions_mut() {
			removed += cleanup_block(&mut func.block, &defined);
		}
		debug!("Cleanup removed {removed} statements");

		Ok(())
	}
}

/// Clean up a block and all of the blocks nested inside of it, returning the number
/// of statements that were removed. The block is never left empty
pub fn cleanup_block(block: &mut Block, defined: &FxHashSet<Identifier>) -> usize {
	let mut removed = 0;
	let contents = std::mem::take(&mut block.contents);
	let mut out = Vec::with_capacity(contents.len());
	for mut stmt in contents {
		let keep = match &mut stmt {
			Statement::Call { call } | Statement::Spawn { call } => {
				defined.contains(&call.function)
			}
			// Only a choice between two taus is removed. If one side still does
			// something the branch stays as it is
			Statement::If { then, els } | Statement::IfFor { then, els } => {
				removed += cleanup_block(then, defined);
				removed += cleanup_block(els, defined);
				!(then.is_tau() && els.is_tau())
			}
			Statement::Select { cases } => {
				for case in cases.iter_mut() {
					removed += cleanup_block(case, defined);
				}
				!cases.iter().all(Block::is_tau)
			}
			Statement::Tau
			| Statement::NewChan { .. }
			| Statement::Send { .. }
			| Statement::Recv { .. }
			| Statement::Close { .. }
			| Statement::NewMutex { .. }
			| Statement::NewRWMutex { .. }
			| Statement::Lock { .. }
			| Statement::Unlock { .. }
			| Statement::RLock { .. }
			| Statement::RUnlock { .. }
			| Statement::NewMem { .. }
			| Statement::MemRead { .. }
			| Statement::MemWrite { .. } => true,
		};

		if keep {
			out.push(stmt);
		} else {
			removed += 1;
		}
	}

	if out.is_empty() {
		out.push(Statement::Tau);
	}
	block.contents = out;

	removed
}
