use log::trace;

use crate::common::Identifier;
use crate::program::Program;
use crate::settings::SimplifySettings;

use self::analysis::util::PrintProgramPass;
use self::analysis::validate::ValidatePass;
use self::opt::cleanup::CleanupPass;
use self::opt::silent::{RemoveSilentPass, SilentPolicy};
use self::opt::unreached::RemoveUnreachedPass;

pub mod analysis;
pub mod opt;

pub trait Pass {
	fn get_name(&self) -> &'static str;

	fn should_run(&self, settings: &SimplifySettings) -> bool {
		let _ = settings;
		true
	}
}

pub trait ProgramPass: Pass {
	fn run_pass(&mut self, data: &mut PassData) -> anyhow::Result<()>;
}

/// State shared between the passes of one simplification run
pub struct PassData<'prog> {
	pub program: &'prog mut Program,
	/// The entry function, if the program defined it when the run started
	pub entry: Option<Identifier>,
}

impl<'prog> PassData<'prog> {
	pub fn new(program: &'prog mut Program, settings: &SimplifySettings) -> Self {
		let entry = program.function(&settings.entry).map(|x| x.name.clone());
		Self { program, entry }
	}
}

/// Run the whole simplification pipeline over a program.
/// The order of the passes matters: cleanup relies on the function table
/// already reflecting every removal
pub fn run_passes(program: &mut Program, settings: &SimplifySettings) -> anyhow::Result<()> {
	let mut data = PassData::new(program, settings);

	let policy = match &data.entry {
		Some(entry) if settings.keep_silent_entry => SilentPolicy::RemoveAllExcept(entry.clone()),
		_ => SilentPolicy::RemoveAll,
	};

	let passes = [
		Box::new(RemoveSilentPass::new(policy)) as Box<dyn ProgramPass>,
		Box::new(RemoveUnreachedPass),
		Box::new(CleanupPass),
		Box::new(ValidatePass),
		Box::new(PrintProgramPass),
	];

	for mut pass in passes {
		if !pass.should_run(settings) {
			continue;
		}
		trace!("Running pass {}", pass.get_name());
		pass.run_pass(&mut data)?;
	}

	Ok(())
}
