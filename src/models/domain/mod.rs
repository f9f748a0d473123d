pub mod question;
pub mod quiz;
pub use question::{Question, QuestionType};
pub use quiz::Quiz;
