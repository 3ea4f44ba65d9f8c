use actix_web::{HttpResponse, Responder, get, post, web};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::graphql::LeadSchema;

#[post("/graphql")]
pub async fn graphql_handler(
    schema: web::Data<LeadSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

#[get("/graphql")]
pub async fn graphiql_page() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}
