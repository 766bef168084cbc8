use log::debug;

use crate::passes::{Pass, PassData, ProgramPass};
use crate::settings::SimplifySettings;

pub struct PrintProgramPass;

impl Pass for PrintProgramPass {
	fn get_name(&self) -> &'static str {
		"print_program"
	}

	fn should_run(&self, settings: &SimplifySettings) -> bool {
		settings.debug
	}
}

impl ProgramPass for PrintProgramPass {
	fn run_pass(&mut self, data: &mut PassData) -> anyhow::Result<()> {
		debug!("Simplified program:\n{}", data.program);

		Ok(())
	}
}
