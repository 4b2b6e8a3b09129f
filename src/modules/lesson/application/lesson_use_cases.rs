use std::sync::Arc;

use crate::lesson::application::ports::incoming::use_cases::{
    AddLessonUseCase, DeleteLessonUseCase, GetLessonsUseCase,
};

#[derive(Clone)]
pub struct LessonUseCases {
    pub add: Arc<dyn AddLessonUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteLessonUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetLessonsUseCase + Send + Sync>,
}
