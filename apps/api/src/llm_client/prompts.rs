// System prompts for the LLM tasks. Wording mirrors the product copy the
// endpoints expose; task wrappers live in `tasks.rs`.

pub const ENHANCE_RESUME_SYSTEM: &str = "You are an expert resume writer. \
    Enhance the given resume content while maintaining professionalism and \
    highlighting key achievements.";

pub const SUGGEST_SKILLS_SYSTEM: &str = "Extract relevant skills from the \
    job description. Return them as a comma-separated list.";

pub const GENERATE_JOB_DESCRIPTION_SYSTEM: &str = "Generate a professional \
    job description based on the title and requirements provided.";

pub const REVIEW_RESUME_SYSTEM: &str = "You are a resume reviewer. Score the \
    given resume from 0 to 100 and list concrete improvement suggestions. \
    Respond with valid JSON only, no markdown fences, shaped as \
    {\"score\": <integer>, \"suggestions\": [<string>, ...]}.";

pub const PARSE_JOB_POST_SYSTEM: &str = "You extract job postings from \
    social media posts. Respond with valid JSON only, no markdown fences, \
    shaped as {\"title\": <string>, \"company\": <string>, \
    \"location\": <string>, \"requirements\": <string>, \
    \"type\": \"full-time\"|\"part-time\"|\"contract\", \
    \"confidence\": <number between 0 and 1>}. Use confidence to express \
    how likely the post is a real job opening.";
