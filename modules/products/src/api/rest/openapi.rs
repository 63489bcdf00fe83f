use rest_problem::{FieldViolation, Problem};
use utoipa::OpenApi;

use super::dto::{CreateProductReq, MessageDto, ProductDto, UpdateProductReq};
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "Product catalog", description = "CRUD for the Product resource"),
    paths(
        handlers::create_product,
        handlers::list_products,
        handlers::get_product,
        handlers::update_product,
        handlers::delete_product,
    ),
    components(schemas(
        ProductDto,
        CreateProductReq,
        UpdateProductReq,
        MessageDto,
        Problem,
        FieldViolation,
    )),
    tags((name = "products", description = "Product catalog"))
)]
pub struct ApiDoc;
