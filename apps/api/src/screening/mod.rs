// Resume screening pipeline: validate upload → extract text → score via LLM.
// Each stage is a pure function of its inputs; the stages share no state.
// All LLM calls go through llm_client — no direct Anthropic SDK calls here.

pub mod extract;
pub mod handlers;
pub mod prompts;
pub mod scoring;
pub mod upload;
