use std::sync::Arc;

use crate::class::application::ports::incoming::use_cases::{
    AddClassUseCase, DeleteClassUseCase, GetClassesUseCase,
};

#[derive(Clone)]
pub struct ClassUseCases {
    pub add: Arc<dyn AddClassUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteClassUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetClassesUseCase + Send + Sync>,
}
