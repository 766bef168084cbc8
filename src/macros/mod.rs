#[macro_export]
macro_rules! push_stmts {
	($block:expr, $($stmt:expr);* $(;)?) => {
		$(
			$block.contents.push($stmt);
		)*
	};
}

/// Build a block from a list of statements
#[macro_export]
macro_rules! block {
	($($stmt:expr);* $(;)?) => {{
		let mut out = $crate::common::block::Block::new();
		$crate::push_stmts!(out, $($stmt);*);
		out
	}};
}
