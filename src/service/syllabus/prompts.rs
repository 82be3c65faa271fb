//! Prompts for syllabus extraction

/// System prompt for syllabus extraction
pub const SYLLABUS_SYSTEM_PROMPT: &str = "You are a helpful assistant that extracts structured data from academic syllabi. Return only valid JSON.";

/// Build extraction prompt from raw syllabus text
pub fn build_syllabus_prompt(text: &str) -> String {
    format!(
        r#"Extract the following from this syllabus:

1. Course Information:
   - Course name
   - Course code
   - Instructor name
   - Credits

2. Assignments:
   - Assignment name/description
   - Due date (format as YYYY-MM-DD)
   - Weight/percentage (if mentioned)
   - Requirements

3. Exams:
   - Exam name (Midterm, Final, etc.)
   - Date (format as YYYY-MM-DD)
   - Time (if specified)
   - Weight/percentage (if mentioned)

4. Reading Schedule:
   - Week/date
   - Topics/chapters

Return as JSON with this structure:
{{
    "course": {{"name": "...", "code": "...", "instructor": "...", "credits": ...}},
    "assignments": [{{"name": "...", "due_date": "...", "weight": "...", "requirements": "..."}}],
    "exams": [{{"name": "...", "date": "...", "time": "...", "weight": "..."}}],
    "readings": [{{"week": "...", "topics": "..."}}]
}}

Syllabus text:
{text}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_text_and_shape() {
        let prompt = build_syllabus_prompt("CS 101 - Intro to Programming");
        assert!(prompt.ends_with("Syllabus text:\nCS 101 - Intro to Programming"));
        assert!(prompt.contains(r#""assignments": [{"name""#));
        assert!(prompt.contains("4. Reading Schedule:"));
    }
}
