use shared::{Category, CreateCategoryRequest, DeleteCategoryRequest, TransactionType};
use tracing::info;

use crate::errors::{Result, ServiceError};
use crate::storage::{CategoryRepository, DbConnection};

#[derive(Clone)]
pub struct CategoryService {
    category_repository: CategoryRepository,
}

impl CategoryService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            category_repository: CategoryRepository::new(db),
        }
    }

    pub async fn list_categories(
        &self,
        user_id: &str,
        transaction_type: Option<TransactionType>,
    ) -> Result<Vec<Category>> {
        let categories = self.category_repository.list(user_id, transaction_type).await?;
        Ok(categories)
    }

    pub async fn create_category(
        &self,
        user_id: &str,
        request: CreateCategoryRequest,
    ) -> Result<Category> {
        let name_len = request.name.chars().count();
        if !(3..=20).contains(&name_len) {
            return Err(ServiceError::validation(
                "Category name must be between 3 and 20 characters",
            ));
        }
        if request.icon.is_empty() || request.icon.chars().count() > 20 {
            return Err(ServiceError::validation(
                "Category icon must be between 1 and 20 characters",
            ));
        }

        let existing = self
            .category_repository
            .get(user_id, &request.name, request.transaction_type)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::conflict("Category already exists"));
        }

        let category = Category {
            name: request.name,
            icon: request.icon,
            transaction_type: request.transaction_type,
        };
        self.category_repository.create(user_id, &category).await?;

        info!("Created {} category '{}'", category.transaction_type, category.name);
        Ok(category)
    }

    /// Delete a category by (name, type). Existing transactions keep their
    /// snapshots; nothing cascades.
    pub async fn delete_category(
        &self,
        user_id: &str,
        request: DeleteCategoryRequest,
    ) -> Result<Category> {
        let category = self
            .category_repository
            .get(user_id, &request.name, request.transaction_type)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category not found"))?;

        self.category_repository
            .delete(user_id, &request.name, request.transaction_type)
            .await?;

        info!("Deleted {} category '{}'", category.transaction_type, category.name);
        Ok(category)
    }
}
