/// The parsing strictness mode
///
/// This can be set with [`ParseOptions::parsing_mode`].
///
/// # Examples
///
/// ```rust
/// use id3v2_header::config::{ParseOptions, ParsingMode};
/// use id3v2_header::header::Header;
///
/// # fn main() -> Result<(), id3v2_header::error::HeaderError> {
/// // The last size byte has its high bit set, which is not allowed
/// let bytes = [b'I', b'D', b'3', 3, 0, 0, 0, 0, 0, 0x81];
///
/// // We are willing to accept broken taggers' output
/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Relaxed);
/// let header = Header::parse_with_options(&mut &bytes[..], parsing_options)?;
///
/// assert_eq!(header.size, 1);
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// ## Examples of behavior
	///
	/// * Unknown frame flag bits - The parser will error
	/// * Zero sized frames - The parser will error
	Strict,
	/// Default mode, less eager to error on recoverably malformed input
	///
	/// Size fields that are not synchsafe are still treated as fatal, since the size of
	/// everything that follows depends on them.
	///
	/// ## Examples of behavior
	///
	/// * Unknown frame flag bits - The bits are ignored, and a warning is logged
	/// * Zero sized frames - The frame header is kept, and a warning is logged
	#[default]
	BestAttempt,
	/// Least eager to error, may produce invalid output
	///
	/// ## Examples of behavior
	///
	/// * Size fields that are not synchsafe - The high bits are discarded, and the parser moves on
	/// * Unknown frame flag bits - The bits are ignored
	Relaxed,
}

/// Options to control how headers are parsed
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) parsing_mode: ParsingMode,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_header::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			parsing_mode: Self::DEFAULT_PARSING_MODE,
		}
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_header::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	/// Get the current parsing mode
	pub fn get_parsing_mode(&self) -> ParsingMode {
		self.parsing_mode
	}
}
