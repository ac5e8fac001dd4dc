mod ids;
mod image;
mod outcome;
mod question;

pub use ids::SessionId;
pub use image::{ImageRef, ImageRefError, PLACEHOLDER_IMAGE_URL};
pub use outcome::QuizOutcome;
pub use question::{
    OPTION_COUNT, Question, QuestionBatch, QuestionDraft, QuestionError, QuestionWithImage,
};
