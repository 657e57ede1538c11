// All prompt constants for the Generation module.

/// System prompt for both generation calls.
pub const GENERATION_SYSTEM: &str = "You are an expert career coach and professional writer \
    helping a job applicant tailor their application materials. \
    Write in a natural, professional register. \
    Return only the requested document, with no preamble or commentary.";

/// Cover letter prompt template.
/// Replace `{resume}`, `{skills}`, `{job}` before sending.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = "\
Based on the resume: {resume}, skills: {skills}, and job title: {job}, \
write a professional and tailored cover letter. \
Make it enthusiastic and highlight why the applicant is a good fit.";

/// Résumé tailoring prompt template.
/// Replace `{resume}`, `{jobdesc}` before sending.
pub const RESUME_UPDATE_PROMPT_TEMPLATE: &str = "\
Here is a resume:
{resume}

Improve and tailor this resume based on the following job description:
{jobdesc}

Highlight matching skills and experience.
Return only the updated resume text.";
