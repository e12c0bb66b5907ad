// LLM prompt constants for the screening module.

/// System prompt for ATS scoring — enforces JSON-only output.
pub const ATS_SCORE_SYSTEM: &str = "You are an AI-powered resume analysis tool \
    emulating an applicant tracking system. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// ATS scoring prompt template. Replace `{resume_text}` and
/// `{job_description_text}` before sending.
pub const ATS_SCORE_PROMPT_TEMPLATE: &str = r#"Given a resume and a job description,
determine the compatibility score, identify keyword matches and skill gaps, and provide feedback.

Resume:
{resume_text}

Job Description:
{job_description_text}

Analyze the resume against the job description and return a JSON object with this EXACT schema (no extra fields):
{
  "compatibilityScore": 75,
  "keywordMatches": ["keyword from the job description found in the resume"],
  "skillGaps": ["skill from the job description missing in the resume"],
  "feedback": "Actionable feedback for the candidate to improve their resume."
}

Rules:
- compatibilityScore is an integer between 0 and 100 representing the compatibility of the resume with the job description.
- keywordMatches lists keywords from the job description found in the resume.
- skillGaps lists skills from the job description missing in the resume.
- feedback is a non-empty string of actionable advice.
"#;
