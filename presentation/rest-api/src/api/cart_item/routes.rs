use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart_item::use_cases::clear::{ClearCartItemsParams, ClearCartItemsUseCase};
use business::domain::cart_item::use_cases::create::{CreateCartItemParams, CreateCartItemUseCase};
use business::domain::cart_item::use_cases::delete::{DeleteCartItemParams, DeleteCartItemUseCase};
use business::domain::cart_item::use_cases::get_all::{
    GetAllCartItemsParams, GetAllCartItemsUseCase,
};
use business::domain::cart_item::use_cases::get_by_id::{
    GetCartItemByIdParams, GetCartItemByIdUseCase,
};
use business::domain::cart_item::use_cases::update::{UpdateCartItemParams, UpdateCartItemUseCase};

use crate::api::cart_item::dto::{CartItemRequest, CartItemResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartItemApi {
    create_use_case: Arc<dyn CreateCartItemUseCase>,
    get_all_use_case: Arc<dyn GetAllCartItemsUseCase>,
    get_by_id_use_case: Arc<dyn GetCartItemByIdUseCase>,
    update_use_case: Arc<dyn UpdateCartItemUseCase>,
    delete_use_case: Arc<dyn DeleteCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartItemsUseCase>,
}

impl CartItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCartItemUseCase>,
        get_all_use_case: Arc<dyn GetAllCartItemsUseCase>,
        get_by_id_use_case: Arc<dyn GetCartItemByIdUseCase>,
        update_use_case: Arc<dyn UpdateCartItemUseCase>,
        delete_use_case: Arc<dyn DeleteCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartItemsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            clear_use_case,
        }
    }
}

/// Cart item management API
#[OpenApi]
impl CartItemApi {
    /// Add an item to a shopcart
    ///
    /// The cart must already exist; its id comes from the path.
    #[oai(
        path = "/shopcarts/:shopcart_id/items",
        method = "post",
        tag = "ApiTags::CartItems"
    )]
    async fn create(
        &self,
        shopcart_id: Path<i32>,
        body: Json<CartItemRequest>,
    ) -> CreateCartItemResponse {
        let item = match body.0.into_domain() {
            Ok(item) => item,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return CreateCartItemResponse::BadRequest(json);
            }
        };

        let params = CreateCartItemParams {
            shopcart_id: shopcart_id.0,
            item,
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => CreateCartItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => CreateCartItemResponse::NotFound(json),
                    400 => CreateCartItemResponse::BadRequest(json),
                    _ => CreateCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// List the items of a shopcart
    #[oai(
        path = "/shopcarts/:shopcart_id/items",
        method = "get",
        tag = "ApiTags::CartItems"
    )]
    async fn list(&self, shopcart_id: Path<i32>) -> ListCartItemsResponse {
        match self
            .get_all_use_case
            .execute(GetAllCartItemsParams {
                shopcart_id: shopcart_id.0,
            })
            .await
        {
            Ok(items) => {
                let responses: Vec<CartItemResponse> =
                    items.into_iter().map(|i| i.into()).collect();
                ListCartItemsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ListCartItemsResponse::NotFound(json),
                    _ => ListCartItemsResponse::InternalError(json),
                }
            }
        }
    }

    /// Retrieve an item
    ///
    /// The item must belong to the cart in the path.
    #[oai(
        path = "/shopcarts/:shopcart_id/items/:item_id",
        method = "get",
        tag = "ApiTags::CartItems"
    )]
    async fn get(&self, shopcart_id: Path<i32>, item_id: Path<i32>) -> GetCartItemResponse {
        match self
            .get_by_id_use_case
            .execute(GetCartItemByIdParams {
                shopcart_id: shopcart_id.0,
                id: item_id.0,
            })
            .await
        {
            Ok(item) => GetCartItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCartItemResponse::NotFound(json),
                    _ => GetCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an item
    ///
    /// Replaces the item's fields from the body; id and owning cart are
    /// preserved.
    #[oai(
        path = "/shopcarts/:shopcart_id/items/:item_id",
        method = "put",
        tag = "ApiTags::CartItems"
    )]
    async fn update(
        &self,
        shopcart_id: Path<i32>,
        item_id: Path<i32>,
        body: Json<CartItemRequest>,
    ) -> UpdateCartItemResponse {
        let item = match body.0.into_domain() {
            Ok(item) => item,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return UpdateCartItemResponse::BadRequest(json);
            }
        };

        let params = UpdateCartItemParams {
            shopcart_id: shopcart_id.0,
            id: item_id.0,
            item,
        };

        match self.update_use_case.execute(params).await {
            Ok(item) => UpdateCartItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateCartItemResponse::NotFound(json),
                    400 => UpdateCartItemResponse::BadRequest(json),
                    _ => UpdateCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete an item
    ///
    /// Removing an absent item succeeds.
    #[oai(
        path = "/shopcarts/:shopcart_id/items/:item_id",
        method = "delete",
        tag = "ApiTags::CartItems"
    )]
    async fn delete(&self, shopcart_id: Path<i32>, item_id: Path<i32>) -> DeleteCartItemResponse {
        match self
            .delete_use_case
            .execute(DeleteCartItemParams {
                shopcart_id: shopcart_id.0,
                id: item_id.0,
            })
            .await
        {
            Ok(()) => DeleteCartItemResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteCartItemResponse::InternalError(json)
            }
        }
    }

    /// Clear a shopcart
    ///
    /// Removes every item from the cart; the cart itself remains.
    #[oai(
        path = "/shopcarts/:shopcart_id/items",
        method = "delete",
        tag = "ApiTags::CartItems"
    )]
    async fn clear(&self, shopcart_id: Path<i32>) -> ClearCartItemsResponse {
        match self
            .clear_use_case
            .execute(ClearCartItemsParams {
                shopcart_id: shopcart_id.0,
            })
            .await
        {
            Ok(_count) => ClearCartItemsResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ClearCartItemsResponse::NotFound(json),
                    _ => ClearCartItemsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCartItemResponse {
    #[oai(status = 201)]
    Created(Json<CartItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListCartItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CartItemResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartItemResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCartItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartItemsResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
