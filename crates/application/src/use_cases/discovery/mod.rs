mod resolve_srv_questions;

pub use resolve_srv_questions::{ResolveSrvQuestionsUseCase, SrvResolution};
