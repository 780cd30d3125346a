#[derive(PartialEq)]
pub struct Error {
	pub kind: ErrorKind,
	pub message: &'static str,
}

#[derive(PartialEq, Debug)]
pub enum ErrorKind {
	InvalidMagnitude,
	EmptyBits,
	Overflow,
}

impl std::fmt::Debug for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Error").field("kind", &self.kind).field("message", &self.message).finish()
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.message)
	}
}

impl std::error::Error for Error {}

impl Error {
	pub fn new(kind: ErrorKind, msg: &'static str) -> Self {
		Self { kind, message: msg }
	}

	#[cold]
	pub fn new_invalid_magnitude(msg: &'static str) -> Self {
		Self::new(ErrorKind::InvalidMagnitude, msg)
	}

	#[cold]
	pub fn new_empty_bits(msg: &'static str) -> Self {
		Self::new(ErrorKind::EmptyBits, msg)
	}

	#[cold]
	pub fn new_overflow(msg: &'static str) -> Self {
		Self::new(ErrorKind::Overflow, msg)
	}
}

#[inline(always)]
#[must_use]
pub fn assert(what: bool, err: fn() -> Error) -> Result<(), Error> {
	if what {
		Ok(())
	} else {
		Err(err())
	}
}
