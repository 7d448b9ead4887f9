// Prompt templates for document generation.
// Placeholders are replaced with `str::replace` before sending.

/// Resume prompt. Placeholders: `{candidate_name}`, `{candidate_name_upper}`,
/// `{contact_line}`, `{job_title}`, `{company_name}`, `{resume_json}`,
/// `{job_description}`.
pub const RESUME_PROMPT_TEMPLATE: &str = r#"You are a professional resume writer.
Generate a clean, modern, ATS-friendly resume for {candidate_name} applying for the role of {job_title} at {company_name}.

CANDIDATE INFO (from resume):
{resume_json}

JOB DESCRIPTION:
{job_description}

STRICT RULES:
- Use ONLY the candidate's actual information. No fake companies, roles, or achievements.
- If a section has no data, OMIT it completely. Do not write placeholder text for empty sections.
- Use only explicitly listed skills, tools, or experiences. Do not invent.
- Tailor wording to {job_title} at {company_name} using the job description's keywords.
- Do NOT include location or address unless provided.
- Do NOT use asterisk (*) symbols; use only bullet points (•).
- Do NOT use "|" anywhere except the contact line and job lines.
- The output must end with the last section of the resume. No notes.

RESUME BLUEPRINT:

{candidate_name_upper}
{contact_line}

PROFESSIONAL SUMMARY
[2-3 lines on experience, top skills and goals, tailored to {job_title} at {company_name}.]

WORK EXPERIENCE
[Only if experience exists. For each role, most recent first:]
Job Title | Company | Duration
• Achievement (metrics where possible)
• Achievement
• Achievement

EDUCATION
[Only if present:]
Degree | University | Graduation Year

SKILLS
[Comma-separated lists, grouped by category, never bullets:]
Programming Languages: ...
Frameworks & Libraries: ...
Tools & Technologies: ...

PROJECTS
[Only if present:]
Project Name
• What was built (technologies relevant to the job)
• Key outcome

CERTIFICATIONS
EXTRACURRICULAR ACTIVITIES
AWARDS & ACHIEVEMENTS
VOLUNTEER
LANGUAGES
INTERESTS
[Each of the sections above only if the data exists.]
"#;

/// Cover letter prompt. Placeholders: `{candidate_name}`, `{contact_line}`,
/// `{current_date}`, `{job_title}`, `{company_name}`, `{resume_json}`,
/// `{job_description}`.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"You are a professional career coach and resume writer.
Generate a clean, professional cover letter for {candidate_name}, applying for the role of {job_title} at {company_name}.

CANDIDATE INFO (from resume):
{resume_json}

JOB DESCRIPTION:
{job_description}

STRICT RULES:
- Use ONLY the candidate's real information. No fake experience, projects, or achievements.
- Do NOT invent company values or mission statements. Use only details in the job description.
- Rewrite the resume as a persuasive narrative; do not repeat it verbatim.
- Keep it to 3-4 short paragraphs, one page max. Professional, confident tone.

COVER LETTER BLUEPRINT:

{candidate_name}
{contact_line}

{current_date}

{company_name}
Human Resources Department

Dear Hiring Manager,

[Opening: enthusiasm for the {job_title} position at {company_name}.]

[Body 1: most relevant experience, with measurable results.]

[Body 2: skills that match the job description and how they help {company_name}.]

[Closing: reaffirm interest, availability for interview, thanks.]

Sincerely,
{candidate_name}
"#;
