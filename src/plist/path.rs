use crate::plist::{PlistError, Result, Value};

/// One parsed operation in a key path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select a dictionary entry by key.
	Key(String),
	/// Select an array element by zero-based index.
	Index(usize),
}

/// Parsed key path expression.
#[derive(Debug, Clone)]
pub struct KeyPath {
	/// Original expression text.
	pub source: String,
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl KeyPath {
	/// Parse dotted key syntax with optional `[index]` selectors.
	///
	/// Keys may contain any character; `.`, `[` and `\` must be escaped with a
	/// backslash (`com\.apple\.version`). A path may start with an index when
	/// the root is an array (`[0].URL`).
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || PlistError::InvalidKeyPath { path: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let mut chars = input.chars().peekable();
		let mut steps = Vec::new();

		loop {
			let mut key = String::new();
			while let Some(&ch) = chars.peek() {
				match ch {
					'.' | '[' => break,
					'\\' => {
						chars.next();
						key.push(chars.next().ok_or_else(invalid)?);
					}
					_ => {
						chars.next();
						key.push(ch);
					}
				}
			}

			let has_key = !key.is_empty();
			if has_key {
				steps.push(PathStep::Key(key));
			}

			let mut has_index = false;
			while chars.next_if_eq(&'[').is_some() {
				let mut digits = String::new();
				while let Some(digit) = chars.next_if(char::is_ascii_digit) {
					digits.push(digit);
				}
				if digits.is_empty() || chars.next() != Some(']') {
					return Err(invalid());
				}
				steps.push(PathStep::Index(digits.parse::<usize>().map_err(|_| invalid())?));
				has_index = true;
			}

			if !has_key && !has_index {
				return Err(invalid());
			}

			match chars.next() {
				None => break,
				Some('.') if chars.peek().is_some() => {}
				Some(_) => return Err(invalid()),
			}
		}

		Ok(Self {
			source: input.to_owned(),
			steps,
		})
	}

	/// Walk `root` and return the selected value, or `KeyPathNotFound`.
	pub fn resolve<'a>(&self, root: &'a Value) -> Result<&'a Value> {
		root.lookup(self).ok_or_else(|| PlistError::KeyPathNotFound { path: self.source.clone() })
	}
}

impl Value {
	/// Follow a key path through nested dictionaries and arrays.
	pub fn lookup(&self, path: &KeyPath) -> Option<&Value> {
		path.steps.iter().try_fold(self, |current, step| match step {
			PathStep::Key(key) => current.get(key),
			PathStep::Index(idx) => current.index(*idx),
		})
	}
}
