// Job description generation: produces a draft description from a job role.
// The client pastes the result into the score form's description field, so
// the screening pipeline keeps a single validation path for that text.

pub mod handlers;
pub mod prompts;
