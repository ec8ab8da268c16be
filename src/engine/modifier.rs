/// Keys that can act as the axis-lock modifier, named as in `KeyboardEvent.key`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModifierKey {
	#[default]
	Shift,
	Control,
	Alt,
	Meta,
}

impl ModifierKey {
	pub const fn key_name(self) -> &'static str {
		match self {
			ModifierKey::Shift => "Shift",
			ModifierKey::Control => "Control",
			ModifierKey::Alt => "Alt",
			ModifierKey::Meta => "Meta",
		}
	}

	pub fn matches(self, key: &str) -> bool {
		key == self.key_name()
	}
}

/// Tracks whether the designated modifier is held. Independent of stroke state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModifierTracker {
	key: ModifierKey,
	held: bool,
}

impl ModifierTracker {
	pub fn new(key: ModifierKey) -> Self {
		Self { key, held: false }
	}

	pub fn is_held(&self) -> bool {
		self.held
	}

	/// Returns whether the held state changed.
	pub fn key_down(&mut self, key: &str) -> bool {
		self.set(key, true)
	}

	/// Returns whether the held state changed.
	pub fn key_up(&mut self, key: &str) -> bool {
		self.set(key, false)
	}

	/// Forgets a held modifier, e.g. when the listeners are torn down and the key-up would be
	/// missed.
	pub fn release(&mut self) {
		self.held = false;
	}

	fn set(&mut self, key: &str, held: bool) -> bool {
		if !self.key.matches(key) || self.held == held {
			return false;
		}
		self.held = held;
		true
	}
}
