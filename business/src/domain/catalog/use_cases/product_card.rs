use async_trait::async_trait;

use crate::domain::product::card::CardView;
use crate::domain::product::carousel::CarouselMove;
use crate::domain::product::value_objects::ProductCode;

pub struct GetProductCardParams {
    pub code: ProductCode,
    pub photo_index: usize,
    pub movement: CarouselMove,
}

#[async_trait]
pub trait GetProductCardUseCase: Send + Sync {
    /// Unknown codes, and any code while the catalog is loading, yield the
    /// loading placeholder.
    async fn execute(&self, params: GetProductCardParams) -> CardView;
}
