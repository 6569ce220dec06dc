//! Canned assistant replies for the chat-style wizard.
//!
//! The original flow picked a follow-up reply at random, which made the
//! conversation untestable. Here the templates are an explicit enumeration
//! and the selection strategy is injected, so a round-robin picker gives a
//! fully deterministic conversation and a seeded picker reproduces a given
//! "random" one.

/// Opening message of every wizard session.
pub const GREETING: &str = "Hi! \u{1f44b} What is your event about?";

/// Sent after the user's first message, before the details form is shown.
pub const DETAILS_PROMPT: &str =
    "Perfect! Let me help you create an amazing invitation. Please fill in the event details.";

/// Shown while the generated versions are being prepared.
pub const GENERATING: &str =
    "\u{2728} Generating your invitations... I'm creating 3 beautiful versions for you!";

/// Accompanies the generated versions once they are ready.
pub const REVEAL: &str = "Here are your AI-generated invitations! Swipe through the carousel to \
     see all versions. When you find one you love, you can export it.";

/// Replies used for any later free-form message.
pub const FOLLOW_UPS: [&str; 4] = [
    "That sounds wonderful! Let me suggest some design ideas...",
    "Great choice! I can help make this special.",
    "I love it! The invite will look amazing with that mood.",
    "Perfect! Let me adjust the design to match your vision.",
];

/// Strategy for choosing among `len` reply templates.
pub trait ResponsePicker {
    /// Returns an index in `0..len`. `len` is always at least 1.
    fn pick(&mut self, len: usize) -> usize;
}

/// Cycles through the templates in order.
#[derive(Debug, Default)]
pub struct RoundRobinPicker {
    next: usize,
}

impl ResponsePicker for RoundRobinPicker {
    fn pick(&mut self, len: usize) -> usize {
        let index = self.next % len;
        self.next = self.next.wrapping_add(1);
        index
    }
}

/// Pseudo-random selection from a caller-supplied seed, so a "random"
/// conversation can still be replayed exactly.
#[derive(Debug)]
pub struct SeededPicker {
    state: u64,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl ResponsePicker for SeededPicker {
    fn pick(&mut self, len: usize) -> usize {
        // Numerical Recipes LCG constants
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.state >> 33) % len as u64) as usize
    }
}

/// Picks the next follow-up reply using the given strategy.
pub fn next_follow_up<P: ResponsePicker>(picker: &mut P) -> &'static str {
    FOLLOW_UPS[picker.pick(FOLLOW_UPS.len())]
}
