pub mod discovery;

pub use discovery::{ResolveSrvQuestionsUseCase, SrvResolution};
