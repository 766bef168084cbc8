use anyhow::Context;
use migo::parse::lex::{lex, Token};
use migo::{SimplifySettings, SimplifySettingsBuilder};

/// Read the settings for a test from the comment on its first line, such as
/// `-- entry=main no_validate remove_silent_entry`
pub fn get_control_comment(contents: &str) -> anyhow::Result<SimplifySettings> {
	let settings = SimplifySettingsBuilder::new();

	let lexed = lex(contents).context("Failed to lex text")?;
	let Some(first) = lexed.first() else { return Ok(settings.build()) };
	let Token::Comment(comment) = &first.0 else { return Ok(settings.build()) };

	let mut settings = settings
		.validate(!comment.contains("no_validate"))
		.keep_silent_entry(!comment.contains("remove_silent_entry"))
		.debug(comment.contains("debug"));
	if let Some(entry) = comment
		.split_whitespace()
		.find_map(|x| x.strip_prefix("entry="))
	{
		settings = settings.entry(entry);
	}

	Ok(settings.build())
}
