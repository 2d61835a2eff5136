use crate::data::models::product::{NewProduct, Product, UpdateProduct};
use crate::data::repos::implementors::product_repo::ProductRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::ProductServiceError;

pub struct ProductService;

impl ProductService {
    pub fn new() -> Self {
        ProductService
    }

    pub async fn get_products(
        &self,
        is_active: Option<bool>,
    ) -> Result<Vec<Product>, ProductServiceError> {
        let repo = ProductRepo::new();
        let products = repo
            .get_filtered(is_active)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?;

        Ok(products.unwrap_or_default())
    }

    /// Creates a product; the product_code business key must be free.
    pub async fn create_product(
        &self,
        item: NewProduct<'_>,
    ) -> Result<Product, ProductServiceError> {
        let repo = ProductRepo::new();

        if repo
            .get_by_code(item.product_code)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .is_some()
        {
            return Err(ProductServiceError::ProductAlreadyExists);
        }

        let code = item.product_code.to_string();
        repo.add(item)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?;

        repo.get_by_code(&code)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .ok_or(ProductServiceError::DatabaseError)
    }

    /// Insert-or-overwrite by product_code, used by the bulk catalog import.
    /// An existing row is fully overwritten with the imported values.
    pub async fn upsert_by_code(
        &self,
        code: &str,
        new: NewProduct<'_>,
        update: UpdateProduct<'_>,
    ) -> Result<Product, ProductServiceError> {
        let repo = ProductRepo::new();

        match repo
            .get_by_code(code)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
        {
            Some(existing) => {
                repo.update(existing.product_id, update)
                    .await
                    .map_err(|_| ProductServiceError::DatabaseError)?;
            }
            None => {
                repo.add(new)
                    .await
                    .map_err(|_| ProductServiceError::DatabaseError)?;
            }
        }

        repo.get_by_code(code)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .ok_or(ProductServiceError::DatabaseError)
    }

    pub async fn update_product(
        &self,
        product_id: i32,
        form: UpdateProduct<'_>,
    ) -> Result<Product, ProductServiceError> {
        let repo = ProductRepo::new();

        let existing = repo
            .get_by_id(product_id)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .ok_or(ProductServiceError::ProductNotFound)?;

        // An all-empty patch has nothing to write.
        if form == UpdateProduct::default() {
            return Ok(existing);
        }

        repo.update(product_id, form)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?;

        repo.get_by_id(product_id)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .ok_or(ProductServiceError::ProductNotFound)
    }

    pub async fn delete_product(&self, product_id: i32) -> Result<(), ProductServiceError> {
        let repo = ProductRepo::new();

        if repo
            .get_by_id(product_id)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .is_none()
        {
            return Err(ProductServiceError::ProductNotFound);
        }

        repo.delete(product_id)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)
    }
}

impl Default for ProductService {
    fn default() -> Self {
        Self::new()
    }
}
