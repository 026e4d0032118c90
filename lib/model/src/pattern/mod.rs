mod quad_template;
mod term_pattern;
mod value_match;

pub use quad_template::QuadTemplate;
pub use term_pattern::{LanguageMatch, TermPattern, TermTemplate};
pub use value_match::ValueMatch;
