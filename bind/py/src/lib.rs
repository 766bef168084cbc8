use migo::{
	common::function::Function, output::format_program, parse::Parser, program::Program,
	SimplifySettings,
};
use pyo3::{exceptions::PyRuntimeError, prelude::*};

/// A Python module implemented in Rust.
#[pymodule]
fn migo_simplify(_py: Python, m: &PyModule) -> PyResult<()> {
	m.add_function(wrap_pyfunction!(parse_program, m)?)?;
	m.add_function(wrap_pyfunction!(simplify_program, m)?)?;
	m.add_class::<PyProgram>()?;
	m.add_class::<PySimplifySettings>()?;
	m.add_class::<PyFunction>()?;
	Ok(())
}

/// Parse MiGo text into a program
#[pyfunction]
fn parse_program(text: &str) -> PyResult<PyProgram> {
	let mut parser = Parser::new();
	parser
		.parse(text)
		.map_err(|x| PyRuntimeError::new_err(format!("{x:?}")))?;
	let program = parser.finish();
	Ok(PyProgram { inner: program })
}

/// Simplify a program, returning the simplified copy
#[pyfunction]
fn simplify_program(program: PyProgram, settings: PySimplifySettings) -> PyResult<PyProgram> {
	let mut program = program.inner;
	migo::simplify_program(&mut program, &settings.inner)
		.map_err(|x| PyRuntimeError::new_err(format!("{x:?}")))?;

	Ok(PyProgram { inner: program })
}

#[pyclass(name = "Program")]
#[derive(Clone)]
struct PyProgram {
	inner: Program,
}

#[pymethods]
impl PyProgram {
	fn functions(&self) -> Vec<PyFunction> {
		self.inner
			.functions()
			.iter()
			.map(|x| PyFunction { inner: x.clone() })
			.collect()
	}

	fn to_text(&self) -> String {
		self.inner.to_string()
	}

	fn to_json(&self) -> PyResult<String> {
		format_program(&self.inner, true).map_err(|x| PyRuntimeError::new_err(format!("{x:?}")))
	}
}

#[pyclass(name = "SimplifySettings")]
#[derive(Clone)]
struct PySimplifySettings {
	inner: SimplifySettings,
}

#[pymethods]
impl PySimplifySettings {
	#[new]
	fn new() -> Self {
		Self {
			inner: SimplifySettings::new(),
		}
	}

	fn entry(&mut self, val: &str) {
		self.inner.entry = val.into();
	}

	fn validate(&mut self, val: bool) {
		self.inner.validate = val;
	}

	fn keep_silent_entry(&mut self, val: bool) {
		self.inner.keep_silent_entry = val;
	}

	fn debug(&mut self, val: bool) {
		self.inner.debug = val;
	}
}

#[pyclass(name = "Function")]
#[derive(Clone)]
struct PyFunction {
	inner: Function,
}

#[pymethods]
impl PyFunction {
	fn name(&self) -> String {
		self.inner.name.to_string()
	}

	fn params(&self) -> Vec<String> {
		self.inner
			.params
			.iter()
			.map(|x| x.callee.to_string())
			.collect()
	}

	fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	fn to_text(&self) -> String {
		self.inner.to_string()
	}
}
