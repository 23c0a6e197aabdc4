// Inter Eval - Interview transcript evaluator
// Library exports

pub mod config;
pub mod errors;
pub mod evaluation;
pub mod logging;
pub mod prompt;
pub mod providers;
pub mod server;
pub mod transcript;

pub use errors::EvalError;
pub use evaluation::Evaluator;
pub use prompt::TemplateMode;
