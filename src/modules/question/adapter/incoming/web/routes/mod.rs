mod add_answer;
mod add_question;
mod delete_answer;
mod delete_question;
mod edit_answer;
mod edit_question;
mod get_admin_questions;
mod get_question;
mod get_questions;
mod get_quiz;

pub use add_answer::*;
pub use add_question::*;
pub use delete_answer::*;
pub use delete_question::*;
pub use edit_answer::*;
pub use edit_question::*;
pub use get_admin_questions::*;
pub use get_question::*;
pub use get_questions::*;
pub use get_quiz::*;
