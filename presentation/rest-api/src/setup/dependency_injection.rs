use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart_item::repository::CartItemRepositoryPostgres;
use persistence::shopcart::repository::ShopCartRepositoryPostgres;

use business::application::cart_item::clear::ClearCartItemsUseCaseImpl;
use business::application::cart_item::create::CreateCartItemUseCaseImpl;
use business::application::cart_item::delete::DeleteCartItemUseCaseImpl;
use business::application::cart_item::get_all::GetAllCartItemsUseCaseImpl;
use business::application::cart_item::get_by_id::GetCartItemByIdUseCaseImpl;
use business::application::cart_item::update::UpdateCartItemUseCaseImpl;
use business::application::shopcart::clear_all::ClearAllShopCartsUseCaseImpl;
use business::application::shopcart::create::CreateShopCartUseCaseImpl;
use business::application::shopcart::delete::DeleteShopCartUseCaseImpl;
use business::application::shopcart::get_all::GetAllShopCartsUseCaseImpl;
use business::application::shopcart::get_by_id::GetShopCartByIdUseCaseImpl;
use business::application::shopcart::update::UpdateShopCartUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub shopcart_api: crate::api::shopcart::routes::ShopCartApi,
    pub cart_item_api: crate::api::cart_item::routes::CartItemApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let shopcart_repository = Arc::new(ShopCartRepositoryPostgres::new(pool.clone()));
        let cart_item_repository = Arc::new(CartItemRepositoryPostgres::new(pool));

        // ShopCart use cases
        let create_shopcart_use_case = Arc::new(CreateShopCartUseCaseImpl {
            repository: shopcart_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_shopcarts_use_case = Arc::new(GetAllShopCartsUseCaseImpl {
            repository: shopcart_repository.clone(),
            logger: logger.clone(),
        });
        let get_shopcart_by_id_use_case = Arc::new(GetShopCartByIdUseCaseImpl {
            repository: shopcart_repository.clone(),
            logger: logger.clone(),
        });
        let update_shopcart_use_case = Arc::new(UpdateShopCartUseCaseImpl {
            repository: shopcart_repository.clone(),
            logger: logger.clone(),
        });
        let delete_shopcart_use_case = Arc::new(DeleteShopCartUseCaseImpl {
            repository: shopcart_repository.clone(),
            logger: logger.clone(),
        });
        let clear_all_shopcarts_use_case = Arc::new(ClearAllShopCartsUseCaseImpl {
            repository: shopcart_repository.clone(),
            logger: logger.clone(),
        });

        // CartItem use cases
        let create_cart_item_use_case = Arc::new(CreateCartItemUseCaseImpl {
            repository: cart_item_repository.clone(),
            cart_repository: shopcart_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_cart_items_use_case = Arc::new(GetAllCartItemsUseCaseImpl {
            repository: cart_item_repository.clone(),
            cart_repository: shopcart_repository.clone(),
            logger: logger.clone(),
        });
        let get_cart_item_by_id_use_case = Arc::new(GetCartItemByIdUseCaseImpl {
            repository: cart_item_repository.clone(),
            logger: logger.clone(),
        });
        let update_cart_item_use_case = Arc::new(UpdateCartItemUseCaseImpl {
            repository: cart_item_repository.clone(),
            logger: logger.clone(),
        });
        let delete_cart_item_use_case = Arc::new(DeleteCartItemUseCaseImpl {
            repository: cart_item_repository.clone(),
            logger: logger.clone(),
        });
        let clear_cart_items_use_case = Arc::new(ClearCartItemsUseCaseImpl {
            repository: cart_item_repository,
            cart_repository: shopcart_repository,
            logger,
        });

        let shopcart_api = crate::api::shopcart::routes::ShopCartApi::new(
            create_shopcart_use_case,
            get_all_shopcarts_use_case,
            get_shopcart_by_id_use_case,
            update_shopcart_use_case,
            delete_shopcart_use_case,
            clear_all_shopcarts_use_case,
        );

        let cart_item_api = crate::api::cart_item::routes::CartItemApi::new(
            create_cart_item_use_case,
            get_all_cart_items_use_case,
            get_cart_item_by_id_use_case,
            update_cart_item_use_case,
            delete_cart_item_use_case,
            clear_cart_items_use_case,
        );

        Self {
            health_api,
            shopcart_api,
            cart_item_api,
        }
    }
}
