use std::sync::Arc;

use crate::set::application::ports::incoming::use_cases::{
    AddSetUseCase, DeleteSetUseCase, GetSetsUseCase,
};

#[derive(Clone)]
pub struct SetUseCases {
    pub add: Arc<dyn AddSetUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSetUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetSetsUseCase + Send + Sync>,
}
