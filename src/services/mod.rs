pub mod access_validator;
pub mod question_gateway;
pub mod quiz_service;

pub use access_validator::AccessValidator;
pub use question_gateway::QuestionGateway;
pub use quiz_service::QuizService;
