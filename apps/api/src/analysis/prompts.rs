// Prompt constants for the resume analysis suggestions.
// Cross-cutting fragments live in llm_client::prompts.

/// Suggestion prompt template. Replace every `{placeholder}` before sending.
pub const SUGGESTION_PROMPT_TEMPLATE: &str = r#"Analyze this resume for a {role} position and provide specific, actionable suggestions for improvement.

Resume Text:
{resume_text}

Target Role: {role}
Current ATS Score: {score}/100

Analysis Factors:
- Email present: {email}
- Phone present: {phone}
- Sections found: {sections_found}
- Role-specific keywords found: {keywords_found}
- Quantifiable achievements: {quantifiable_achievements}

Please provide role-specific suggestions:
1. Top 5 improvements tailored for {role} positions to increase ATS score
2. Missing sections or information crucial for {role} roles
3. Role-specific keyword optimization (technical skills, industry terms)
4. Formatting recommendations for {role} applications
5. Content enhancement suggestions specific to {role} requirements
6. Industry-specific achievements and metrics to highlight
7. Skills and certifications relevant to {role} that might be missing

Format your response as structured suggestions with clear, actionable items specifically tailored for {role} positions.
{plain_text_instruction}
{no_fabrication_instruction}"#;
