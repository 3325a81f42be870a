// Prompt for structured resume extraction.
// `{resume_text}` is replaced with the extracted document text, verbatim.

/// Target JSON template the model is asked to fill in.
pub const RESUME_SCHEMA: &str = r#"{
    "name": "",
    "email": "",
    "phone": "",
    "skills": [],
    "education": [],
    "experience": [],
    "projects": [],
    "certifications": []
}"#;

pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"You are an intelligent resume parser.
Extract the following information from the resume text and return ONLY valid JSON:
{schema}
Resume Text:
{resume_text}
"#;

/// Builds the full prompt. The resume text is substituted last and is never
/// rescanned for placeholders.
pub fn build_resume_prompt(resume_text: &str) -> String {
    RESUME_PARSE_PROMPT_TEMPLATE
        .replace("{schema}", RESUME_SCHEMA)
        .replace("{resume_text}", resume_text)
}
