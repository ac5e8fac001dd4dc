use serde_json::{Value, json};

/// Prompt asking for `count` preschool-level Bible questions.
#[must_use]
pub fn questions_prompt(count: usize) -> String {
    format!(
        "You are an expert in early childhood education and biblical studies. \
         Generate a list of {count} simple, multiple-choice Bible quiz questions suitable for \
         children aged 3 to 7. The questions should cover well-known, simple Bible stories and \
         figures (e.g., Noah's Ark, David and Goliath, Jonah and the Whale, Creation, Baby Jesus). \
         Each question must have exactly 3 possible answers, one of which is correct. The language \
         used must be extremely simple and easy for a preschooler to understand. For each question, \
         also provide a \"funFact\" which is a single, simple sentence explaining the story or the \
         answer. Return the response as a JSON object that matches the provided schema."
    )
}

/// Prompt for a friendly cartoon illustrating one question.
#[must_use]
pub fn image_prompt(question_text: &str) -> String {
    format!(
        "A delightful and simple cartoon illustration for a 3-year-old child related to the bible \
         story: \"{question_text}\". The style should be very friendly, with soft rounded shapes, \
         bright and cheerful primary colors, and a happy atmosphere. No text."
    )
}

/// Structured-output schema for the question batch.
#[must_use]
pub fn questions_schema(count: usize) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "questions": {
                "type": "ARRAY",
                "description": format!("A list of {count} questions."),
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "questionText": {
                            "type": "STRING",
                            "description": "The question text, phrased very simply for a young child."
                        },
                        "options": {
                            "type": "ARRAY",
                            "description": "An array of exactly 3 possible answers.",
                            "items": { "type": "STRING" }
                        },
                        "correctAnswer": {
                            "type": "STRING",
                            "description": "The correct answer, which must be one of the strings from the 'options' array."
                        },
                        "funFact": {
                            "type": "STRING",
                            "description": "A single, simple sentence explaining the story or the answer in a fun way."
                        }
                    },
                    "required": ["questionText", "options", "correctAnswer", "funFact"]
                }
            }
        },
        "required": ["questions"]
    })
}
