use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::shopcart::use_cases::clear_all::ClearAllShopCartsUseCase;
use business::domain::shopcart::use_cases::create::{CreateShopCartParams, CreateShopCartUseCase};
use business::domain::shopcart::use_cases::delete::{DeleteShopCartParams, DeleteShopCartUseCase};
use business::domain::shopcart::use_cases::get_all::{
    GetAllShopCartsParams, GetAllShopCartsUseCase,
};
use business::domain::shopcart::use_cases::get_by_id::{
    GetShopCartByIdParams, GetShopCartByIdUseCase,
};
use business::domain::shopcart::use_cases::update::{UpdateShopCartParams, UpdateShopCartUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::shopcart::dto::{CreateShopCartRequest, ShopCartResponse, UpdateShopCartRequest};
use crate::api::tags::ApiTags;

pub struct ShopCartApi {
    create_use_case: Arc<dyn CreateShopCartUseCase>,
    get_all_use_case: Arc<dyn GetAllShopCartsUseCase>,
    get_by_id_use_case: Arc<dyn GetShopCartByIdUseCase>,
    update_use_case: Arc<dyn UpdateShopCartUseCase>,
    delete_use_case: Arc<dyn DeleteShopCartUseCase>,
    clear_all_use_case: Arc<dyn ClearAllShopCartsUseCase>,
}

impl ShopCartApi {
    pub fn new(
        create_use_case: Arc<dyn CreateShopCartUseCase>,
        get_all_use_case: Arc<dyn GetAllShopCartsUseCase>,
        get_by_id_use_case: Arc<dyn GetShopCartByIdUseCase>,
        update_use_case: Arc<dyn UpdateShopCartUseCase>,
        delete_use_case: Arc<dyn DeleteShopCartUseCase>,
        clear_all_use_case: Arc<dyn ClearAllShopCartsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            clear_all_use_case,
        }
    }
}

/// Shopping cart management API
#[OpenApi]
impl ShopCartApi {
    /// Create a shopcart
    ///
    /// Persists a new cart, together with any initial items, and returns it
    /// with its assigned id in the Location header.
    #[oai(path = "/shopcarts", method = "post", tag = "ApiTags::ShopCarts")]
    async fn create(&self, body: Json<CreateShopCartRequest>) -> CreateShopCartResponse {
        let mut items = Vec::with_capacity(body.0.items.len());
        for item in body.0.items {
            match item.into_domain() {
                Ok(item) => items.push(item),
                Err(err) => {
                    let (_status, json) = err.into_error_response();
                    return CreateShopCartResponse::BadRequest(json);
                }
            }
        }

        let params = CreateShopCartParams {
            customer_id: body.0.customer_id,
            items,
        };

        match self.create_use_case.execute(params).await {
            Ok(cart) => {
                let location = format!("/shopcarts/{}", cart.id);
                CreateShopCartResponse::Created(Json(cart.into()), location)
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateShopCartResponse::InternalError(json)
            }
        }
    }

    /// List shopcarts
    ///
    /// Returns every cart, or a zero-or-one element list when the `id`
    /// query filter is present.
    #[oai(path = "/shopcarts", method = "get", tag = "ApiTags::ShopCarts")]
    async fn list(&self, id: Query<Option<i32>>) -> ListShopCartsResponse {
        match self
            .get_all_use_case
            .execute(GetAllShopCartsParams { id: id.0 })
            .await
        {
            Ok(carts) => {
                let responses: Vec<ShopCartResponse> =
                    carts.into_iter().map(|c| c.into()).collect();
                ListShopCartsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListShopCartsResponse::InternalError(json)
            }
        }
    }

    /// Retrieve a shopcart
    #[oai(
        path = "/shopcarts/:shopcart_id",
        method = "get",
        tag = "ApiTags::ShopCarts"
    )]
    async fn get(&self, shopcart_id: Path<i32>) -> GetShopCartResponse {
        match self
            .get_by_id_use_case
            .execute(GetShopCartByIdParams { id: shopcart_id.0 })
            .await
        {
            Ok(cart) => GetShopCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetShopCartResponse::NotFound(json),
                    _ => GetShopCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a shopcart
    ///
    /// Replaces the cart's fields from the body; items are managed through
    /// the item endpoints.
    #[oai(
        path = "/shopcarts/:shopcart_id",
        method = "put",
        tag = "ApiTags::ShopCarts"
    )]
    async fn update(
        &self,
        shopcart_id: Path<i32>,
        body: Json<UpdateShopCartRequest>,
    ) -> UpdateShopCartResponse {
        let params = UpdateShopCartParams {
            id: shopcart_id.0,
            customer_id: body.0.customer_id,
        };

        match self.update_use_case.execute(params).await {
            Ok(cart) => UpdateShopCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateShopCartResponse::NotFound(json),
                    _ => UpdateShopCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a shopcart
    ///
    /// Removes the cart and its items; deleting an absent cart succeeds.
    #[oai(
        path = "/shopcarts/:shopcart_id",
        method = "delete",
        tag = "ApiTags::ShopCarts"
    )]
    async fn delete(&self, shopcart_id: Path<i32>) -> DeleteShopCartResponse {
        match self
            .delete_use_case
            .execute(DeleteShopCartParams { id: shopcart_id.0 })
            .await
        {
            Ok(()) => DeleteShopCartResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteShopCartResponse::InternalError(json)
            }
        }
    }

    /// Clear all shopcarts
    ///
    /// Maintenance reset: removes every cart and item. Used to wipe state
    /// between test runs.
    #[oai(path = "/shopcarts", method = "delete", tag = "ApiTags::ShopCarts")]
    async fn clear_all(&self) -> ClearAllShopCartsResponse {
        match self.clear_all_use_case.execute().await {
            Ok(_count) => ClearAllShopCartsResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearAllShopCartsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateShopCartResponse {
    #[oai(status = 201)]
    Created(Json<ShopCartResponse>, #[oai(header = "Location")] String),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListShopCartsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ShopCartResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetShopCartResponse {
    #[oai(status = 200)]
    Ok(Json<ShopCartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateShopCartResponse {
    #[oai(status = 200)]
    Ok(Json<ShopCartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteShopCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearAllShopCartsResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
