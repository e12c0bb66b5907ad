// LLM prompt constants for the generation module.

/// System prompt for job description drafting — enforces JSON-only output.
pub const JOB_DESCRIPTION_SYSTEM: &str = "You are an expert HR professional \
    specializing in writing compelling job descriptions. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Job description prompt template. Replace `{job_role}` before sending.
pub const JOB_DESCRIPTION_PROMPT_TEMPLATE: &str = r#"Generate a comprehensive and engaging job description for the following role: {job_role}.

The job description should include:
- A brief company overview (you can use a generic placeholder).
- Key responsibilities of the role.
- Required qualifications (education, experience, skills).
- Preferred qualifications or nice-to-haves.
- Information about company culture or benefits (use generic placeholders).

Ensure the description is well-structured, clear, and formatted professionally using markdown (e.g., bullet points for lists). Aim for a description suitable for posting on a job board.

Return a JSON object with this EXACT schema (no extra fields):
{
  "jobDescription": "The generated job description text."
}
"#;
