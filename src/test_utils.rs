#[cfg(test)]
pub mod fixtures {
    use crate::models::{
        domain::{Question, QuestionType, Quiz},
        dto::request::QuestionCreate,
    };

    /// Creates a quiz owned by `owner_id`
    pub fn quiz_owned_by(owner_id: &str) -> Quiz {
        Quiz::new(owner_id, "Ownership and borrowing", None)
    }

    pub fn multiple_choice_request() -> QuestionCreate {
        QuestionCreate {
            question_text: "Which keyword makes a binding mutable?".to_string(),
            question_type: QuestionType::MultipleChoice,
            options: vec![
                "mut".to_string(),
                "var".to_string(),
                "let".to_string(),
                "static".to_string(),
            ],
            correct_answer: Some("mut".to_string()),
            explanation: Some("Bindings are immutable unless declared with mut".to_string()),
            points: 2,
            order: 0,
        }
    }

    pub fn short_answer_request() -> QuestionCreate {
        QuestionCreate {
            question_text: "What does the borrow checker enforce?".to_string(),
            question_type: QuestionType::ShortAnswer,
            options: vec![],
            correct_answer: Some("Aliasing XOR mutability".to_string()),
            explanation: None,
            points: 1,
            order: 1,
        }
    }

    pub fn multiple_choice_question(quiz_id: &str) -> Question {
        Question::from_request(quiz_id, multiple_choice_request())
    }

    pub fn short_answer_question(quiz_id: &str) -> Question {
        Question::from_request(quiz_id, short_answer_request())
    }

    /// A free-form question with the given discriminator
    pub fn question_of_type(quiz_id: &str, question_type: QuestionType) -> Question {
        let mut question = short_answer_question(quiz_id);
        question.question_type = question_type;
        question
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::QuestionType;

    #[test]
    fn test_fixtures_quiz_owned_by() {
        let quiz = quiz_owned_by("user-a");
        assert_eq!(quiz.owner_id, "user-a");
    }

    #[test]
    fn test_fixtures_questions_belong_to_quiz() {
        let mc = multiple_choice_question("quiz-1");
        let sa = short_answer_question("quiz-1");

        assert_eq!(mc.quiz_id, "quiz-1");
        assert_eq!(mc.question_type, QuestionType::MultipleChoice);
        assert_eq!(sa.question_type, QuestionType::ShortAnswer);
        assert_ne!(mc.id, sa.id);
    }
}
