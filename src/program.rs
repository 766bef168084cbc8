use anyhow::bail;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::common::function::Function;
use crate::common::Identifier;

/// A whole MiGo program. Function names are unique and definition order is kept
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Program {
	functions: Vec<Function>,
}

impl Program {
	pub fn new() -> Self {
		Self {
			functions: Vec::new(),
		}
	}

	/// Add a function definition. Fails if a function with the same name already exists
	pub fn add_function(&mut self, func: Function) -> anyhow::Result<()> {
		if self.has_function(&func.name) {
			bail!("Function {} is defined more than once", func.name);
		}
		self.functions.push(func);

		Ok(())
	}

	pub fn function(&self, name: &str) -> Option<&Function> {
		self.functions.iter().find(|x| x.name.as_ref() == name)
	}

	pub fn has_function(&self, name: &str) -> bool {
		self.function(name).is_some()
	}

	pub fn functions(&self) -> &[Function] {
		&self.functions
	}

	pub fn functions_mut(&mut self) -> std::slice::IterMut<'_, Function> {
		self.functions.iter_mut()
	}

	/// Remove a function definition, returning it if it existed
	pub fn remove_function(&mut self, name: &str) -> Option<Function> {
		let pos = self.functions.iter().position(|x| x.name.as_ref() == name)?;
		Some(self.functions.remove(pos))
	}

	/// Keep only the functions that match the predicate, returning the names of the removed ones
	pub fn retain_functions(&mut self, mut f: impl FnMut(&Function) -> bool) -> Vec<Identifier> {
		let mut removed = Vec::new();
		self.functions.retain(|func| {
			let keep = f(func);
			if !keep {
				removed.push(func.name.clone());
			}
			keep
		});

		removed
	}

	/// Names of all of the defined functions
	pub fn function_names(&self) -> FxHashSet<Identifier> {
		self.functions.iter().map(|x| x.name.clone()).collect()
	}

	/// Map from function name to its index in the definition table
	pub fn function_indices(&self) -> FxHashMap<&str, usize> {
		self.functions
			.iter()
			.enumerate()
			.map(|(i, func)| (func.name.as_ref(), i))
			.collect()
	}

	pub fn len(&self) -> usize {
		self.functions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.functions.is_empty()
	}
}
