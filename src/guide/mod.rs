// Guide pipeline - language detection, intent routing and the handlers behind it

pub mod directions;
pub mod handlers;
pub mod knowledge;
pub mod prompt;
pub mod router;
pub mod session;
pub mod translator;
pub mod types;

pub use directions::{DirectionsClient, DirectionsOutcome, DirectionsProvider};
pub use handlers::{Handler, HandlerRegistry};
pub use knowledge::KnowledgeBase;
pub use prompt::Prompt;
pub use router::Router;
pub use session::{Session, user_message};
pub use translator::{GoogleTranslator, Translate, safe_translate};
pub use types::*;
